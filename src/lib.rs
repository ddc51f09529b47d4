//! AMP - Application Messaging Protocol envelope codec
//!
//! Arsitektur:
//! - Wire Envelope: header tetap 48 byte + payload variabel
//! - Content-Bound Integrity: SHA-256 payload terikat di header
//! - Type Registry: bijeksi nama simbolik <-> kode numerik u32
//! - Forward-Compatible: kode tak dikenal ditoleransi saat baca,
//!   ditolak saat tulis
//!
//! Transport (socket, framing, retry) dan key management di luar scope
//! crate ini: collaborator eksternal menyuplai bytes ke [`Message::from_raw`]
//! dan mengkonsumsi bytes dari [`Message::as_raw`].

pub mod protocol;

pub use protocol::{
    Header, Message, MessageType, ProtocolError, StateVector, GENERIC_MESSAGE,
};
