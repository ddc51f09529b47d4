//! Konstanta protokol AMP
//!
//! Semua nilai wire-level didefinisikan di sini: magic bytes, versi,
//! ukuran header, batas ukuran pesan, dan kode numerik tiap message type.

/// Magic number untuk identifikasi protocol family
pub const MAGIC_BYTES: u32 = 0xC0D3_F33D;

/// Versi protokol saat ini
pub const VERSION_NUMBER: u32 = 0x01;

/// Ukuran header tetap: magic(4) + version(4) + type(4) + size(4) + hash(32)
pub const HEADER_SIZE: usize = 48;

/// Batas atas total ukuran pesan (header + payload)
pub const MAX_MESSAGE_SIZE: usize = 4 * 1024 * 1024; // 4MB

/// Batas atas ukuran payload
pub const MAX_PAYLOAD_SIZE: usize = MAX_MESSAGE_SIZE - HEADER_SIZE;

// Kode numerik message type. Grouping: identity 0x0X, liveness 0x1X,
// peer relay 0x2X, state sync 0x3X.
pub const P2P_IDENT_REQUEST: u32 = 0x01;
pub const P2P_IDENT_RESPONSE: u32 = 0x02;
/// Superseded oleh P2P_STATE_ROOT; kode tetap reserved agar tidak dipakai ulang
pub const P2P_ROOT: u32 = 0x10;
pub const P2P_PING: u32 = 0x12;
pub const P2P_PONG: u32 = 0x13;
pub const P2P_INSTRUCTION: u32 = 0x20;
pub const P2P_BASE_MESSAGE: u32 = 0x21;
pub const P2P_STATE_ROOT: u32 = 0x30;
pub const P2P_STATE_COMMITTMENT: u32 = 0x31;
pub const P2P_STATE_CHANGE: u32 = 0x32;
