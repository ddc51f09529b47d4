//! Header Codec: encode/decode header tetap 48 byte
//!
//! Layout (semua integer big-endian):
//! ┌────────┬────────┬──────────────────────────────┐
//! │ Offset │ Length │ Field                        │
//! ├────────┼────────┼──────────────────────────────┤
//! │ 0      │ 4      │ magic                        │
//! │ 4      │ 4      │ version                      │
//! │ 8      │ 4      │ type code                    │
//! │ 12     │ 4      │ payload size                 │
//! │ 16     │ 32     │ SHA-256 payload hash         │
//! └────────┴────────┴──────────────────────────────┘
//!
//! Serialize eksplisit per field, TIDAK cast struct langsung: wire order
//! big-endian tidak boleh bergantung pada layout memory host.

use super::constants::{HEADER_SIZE, MAGIC_BYTES, VERSION_NUMBER};
use super::error::ProtocolError;

/// Header envelope AMP - pure data, tanpa side effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub magic: u32,
    pub version: u32,
    pub type_code: u32,
    pub size: u32,
    pub hash: [u8; 32],
}

impl Header {
    /// Header baru dengan magic/version protokol saat ini
    #[inline(always)]
    pub const fn new(type_code: u32, size: u32, hash: [u8; 32]) -> Self {
        Self {
            magic: MAGIC_BYTES,
            version: VERSION_NUMBER,
            type_code,
            size,
            hash,
        }
    }

    /// Encode ke 48 byte, konkatenasi field sesuai urutan layout
    #[inline(always)]
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(&self.magic.to_be_bytes());
        buf[4..8].copy_from_slice(&self.version.to_be_bytes());
        buf[8..12].copy_from_slice(&self.type_code.to_be_bytes());
        buf[12..16].copy_from_slice(&self.size.to_be_bytes());
        buf[16..48].copy_from_slice(&self.hash);
        buf
    }

    /// Decode dari minimal 48 byte dengan fixed-offset slicing.
    ///
    /// TIDAK memvalidasi magic/version — itu tanggung jawab caller.
    /// Input pendek gagal eksplisit, tidak pernah slice out-of-range.
    #[inline(always)]
    pub fn decode(buf: &[u8]) -> Result<Self, ProtocolError> {
        if buf.len() < HEADER_SIZE {
            return Err(ProtocolError::TruncatedHeader {
                expected: HEADER_SIZE,
                actual: buf.len(),
            });
        }

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&buf[16..48]);

        Ok(Self {
            magic: u32::from_be_bytes(buf[0..4].try_into().unwrap()),
            version: u32::from_be_bytes(buf[4..8].try_into().unwrap()),
            type_code: u32::from_be_bytes(buf[8..12].try_into().unwrap()),
            size: u32::from_be_bytes(buf[12..16].try_into().unwrap()),
            hash,
        })
    }

    /// Cek magic dan version cocok dengan protokol ini.
    ///
    /// Helper untuk caller yang mau menolak foreign traffic; decode sendiri
    /// sengaja tidak memanggil ini.
    #[inline(always)]
    pub const fn matches_protocol(&self) -> bool {
        self.magic == MAGIC_BYTES && self.version == VERSION_NUMBER
    }

    /// Total ukuran pesan (header + payload)
    #[inline(always)]
    pub const fn total_size(&self) -> usize {
        HEADER_SIZE + self.size as usize
    }
}
