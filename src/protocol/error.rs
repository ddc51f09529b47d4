//! Error taxonomy untuk codec AMP
//!
//! Semua kegagalan struktural bersifat lokal dan synchronous: error muncul
//! di call site yang salah, tidak pernah di-swallow atau cuma di-log.
//! Kode type yang tidak dikenal saat BACA bukan error (lihat `types.rs`).

use thiserror::Error;

/// Kegagalan validasi struktural pada konstruksi/parsing envelope
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Nama type tidak terdaftar di registry (write-side rejection)
    #[error("unknown message type: {0}")]
    UnknownType(String),

    /// Kode type tidak terdaftar saat serialize-for-transmission
    #[error("unregistered type code: {0:#010x}")]
    UnregisteredCode(u32),

    /// Input lebih pendek dari 48 byte header
    #[error("truncated header: need {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },

    /// Buffer lebih pendek dari ukuran payload yang dideklarasikan header
    #[error("truncated payload: declared {declared} bytes, got {actual}")]
    TruncatedPayload { declared: usize, actual: usize },

    /// Total pesan melebihi MAX_MESSAGE_SIZE
    #[error("oversized message: {size} bytes exceeds maximum {max}")]
    OversizedMessage { size: usize, max: usize },

    /// Serialize dipanggil sebelum payload pernah di-set
    #[error("incomplete message: payload has not been set")]
    IncompleteMessage,
}
