//! Protocol Layer: AMP wire envelope
//!
//! Prinsip desain:
//! - Fixed-size header: 48 byte, offset field deterministik
//! - Big-endian: wire order tidak bergantung layout memory host
//! - Derived state: size/hash/id selalu dihitung dari payload, tidak
//!   pernah di-set manual
//! - Fail-explicit: input terpotong atau oversized selalu error, tidak
//!   pernah silent slicing

pub mod constants;
mod error;
mod header;
mod message;
mod types;
mod vector;

pub use error::ProtocolError;
pub use header::Header;
pub use message::Message;
pub use types::{name_for_code, MessageType, GENERIC_MESSAGE, REGISTERED_TYPES};
pub use vector::StateVector;
