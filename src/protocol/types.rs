//! Type Registry: pemetaan dua arah antara nama simbolik dan kode numerik
//!
//! Registry adalah bijeksi ketat — satu nama satu kode, satu kode satu nama.
//! Asimetri disengaja antara baca dan tulis:
//! - Tulis (nama -> kode): nama tak terdaftar DITOLAK, producer tidak boleh
//!   emit type yang tidak bermakna.
//! - Baca (kode -> nama): kode tak terdaftar DITOLERANSI sebagai
//!   `GenericMessage` demi forward-compatibility dengan peer yang lebih baru.

use super::constants::*;
use super::error::ProtocolError;

/// Label fallback untuk kode type yang tidak terdaftar
pub const GENERIC_MESSAGE: &str = "GenericMessage";

/// Message type dalam protokol AMP
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    IdentityRequest = P2P_IDENT_REQUEST,
    IdentityResponse = P2P_IDENT_RESPONSE,
    Ping = P2P_PING,
    Pong = P2P_PONG,
    PeerInstruction = P2P_INSTRUCTION,
    PeerMessage = P2P_BASE_MESSAGE,
    StateRoot = P2P_STATE_ROOT,
    StateCommitment = P2P_STATE_COMMITTMENT,
    StateChange = P2P_STATE_CHANGE,
}

/// Semua type terdaftar, untuk iterasi registry
pub const REGISTERED_TYPES: [MessageType; 9] = [
    MessageType::IdentityRequest,
    MessageType::IdentityResponse,
    MessageType::Ping,
    MessageType::Pong,
    MessageType::PeerInstruction,
    MessageType::PeerMessage,
    MessageType::StateRoot,
    MessageType::StateCommitment,
    MessageType::StateChange,
];

impl MessageType {
    /// Kode numerik pada wire
    #[inline(always)]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Lookup kode -> type. `None` untuk kode tak terdaftar.
    #[inline(always)]
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            P2P_IDENT_REQUEST => Some(Self::IdentityRequest),
            P2P_IDENT_RESPONSE => Some(Self::IdentityResponse),
            P2P_PING => Some(Self::Ping),
            P2P_PONG => Some(Self::Pong),
            P2P_INSTRUCTION => Some(Self::PeerInstruction),
            P2P_BASE_MESSAGE => Some(Self::PeerMessage),
            P2P_STATE_ROOT => Some(Self::StateRoot),
            P2P_STATE_COMMITTMENT => Some(Self::StateCommitment),
            P2P_STATE_CHANGE => Some(Self::StateChange),
            _ => None,
        }
    }

    /// Lookup nama -> type. Gagal `UnknownType` untuk nama tak terdaftar.
    pub fn from_name(name: &str) -> Result<Self, ProtocolError> {
        match name {
            "IdentityRequest" => Ok(Self::IdentityRequest),
            "IdentityResponse" => Ok(Self::IdentityResponse),
            "Ping" => Ok(Self::Ping),
            "Pong" => Ok(Self::Pong),
            "PeerInstruction" => Ok(Self::PeerInstruction),
            "PeerMessage" => Ok(Self::PeerMessage),
            "StateRoot" => Ok(Self::StateRoot),
            "StateCommitment" => Ok(Self::StateCommitment),
            "StateChange" => Ok(Self::StateChange),
            _ => Err(ProtocolError::UnknownType(name.to_string())),
        }
    }

    /// Nama simbolik
    pub const fn name(self) -> &'static str {
        match self {
            Self::IdentityRequest => "IdentityRequest",
            Self::IdentityResponse => "IdentityResponse",
            Self::Ping => "Ping",
            Self::Pong => "Pong",
            Self::PeerInstruction => "PeerInstruction",
            Self::PeerMessage => "PeerMessage",
            Self::StateRoot => "StateRoot",
            Self::StateCommitment => "StateCommitment",
            Self::StateChange => "StateChange",
        }
    }
}

/// Nama simbolik untuk sebuah kode, dengan fallback generic.
///
/// Kode tak terdaftar TIDAK pernah error di jalur baca — hanya diagnostic
/// notice, lalu return label generic.
pub fn name_for_code(code: u32) -> &'static str {
    match MessageType::from_code(code) {
        Some(mtype) => mtype.name(),
        None => {
            tracing::warn!("unhandled message type: {code:#010x}");
            GENERIC_MESSAGE
        }
    }
}
