//! Message Envelope: entitas publik header + payload
//!
//! Layout:
//! ┌─────────────────────────────────────────────────────┐
//! │ Header (48 bytes, fixed) - lihat header.rs          │
//! ├─────────────────────────────────────────────────────┤
//! │ Payload (variable, max MAX_PAYLOAD_SIZE)            │
//! └─────────────────────────────────────────────────────┘
//!
//! `size` dan `hash` adalah derived state: keduanya dihitung ulang setiap
//! payload ditulis, tidak pernah bisa di-set independen. Identifier (`id`)
//! juga derived - SHA-256 atas header‖payload, dihitung setiap dipanggil,
//! tidak pernah di-cache.

use std::borrow::Cow;

use sha2::{Digest, Sha256};

use super::constants::{HEADER_SIZE, MAX_MESSAGE_SIZE, MAX_PAYLOAD_SIZE};
use super::error::ProtocolError;
use super::header::Header;
use super::types::{name_for_code, MessageType};
use super::vector::StateVector;

/// SHA-256 helper, dipakai payload hash dan message id
#[inline(always)]
pub(crate) fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Satu unit pesan AMP: header tetap + payload variabel.
///
/// Envelope memiliki buffer-nya secara eksklusif, tidak ada aliasing antar
/// instance. Payload `None` berarti belum pernah di-set; berbeda dengan
/// payload kosong (`Some` dengan vec kosong) hasil `set_data(b"")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    type_code: u32,
    size: u32,
    hash: [u8; 32],
    payload: Option<Vec<u8>>,
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

impl Message {
    /// Envelope kosong: type belum di-set (kode 0, tidak terdaftar),
    /// payload belum ada. Magic/version implisit dari konstanta protokol.
    pub const fn new() -> Self {
        Self {
            type_code: 0,
            size: 0,
            hash: [0u8; 32],
            payload: None,
        }
    }

    /// Constructor dari pasangan (nama type, payload)
    pub fn from_vector(vector: (&str, &[u8])) -> Result<Self, ProtocolError> {
        let (name, data) = vector;
        let mut message = Self::new();
        message.set_type(name)?;
        message.set_data(data)?;
        Ok(message)
    }

    /// Set type dari nama simbolik. Gagal `UnknownType` jika tak terdaftar —
    /// producer tidak boleh lanjut dengan envelope tanpa type valid.
    pub fn set_type(&mut self, name: &str) -> Result<(), ProtocolError> {
        self.type_code = MessageType::from_name(name)?.code();
        Ok(())
    }

    /// Kode type numerik saat ini
    #[inline(always)]
    pub const fn type_code(&self) -> u32 {
        self.type_code
    }

    /// Type terdaftar untuk kode saat ini, `None` jika tak terdaftar
    #[inline(always)]
    pub fn message_type(&self) -> Option<MessageType> {
        MessageType::from_code(self.type_code)
    }

    /// Nama simbolik type. Kode tak terdaftar -> `"GenericMessage"` plus
    /// diagnostic notice, tidak pernah error (forward-compatibility).
    pub fn type_name(&self) -> &'static str {
        name_for_code(self.type_code)
    }

    /// Set payload. Menyimpan bytes (input kosong tetap tersimpan sebagai
    /// buffer kosong), lalu menghitung ulang `size` dan `hash` tanpa syarat.
    ///
    /// Batas ukuran di-enforce di sini, sisi producer.
    pub fn set_data(&mut self, data: &[u8]) -> Result<(), ProtocolError> {
        if data.len() > MAX_PAYLOAD_SIZE {
            return Err(ProtocolError::OversizedMessage {
                size: HEADER_SIZE + data.len(),
                max: MAX_MESSAGE_SIZE,
            });
        }

        self.hash = sha256(data);
        self.size = data.len() as u32;
        self.payload = Some(data.to_vec());
        Ok(())
    }

    /// Payload sebagai teks UTF-8 (lossy), string kosong jika belum di-set.
    ///
    /// Payload biner tidak dijamin round-trip lewat accessor ini —
    /// pakai [`Message::payload`] untuk bytes persis.
    pub fn data(&self) -> Cow<'_, str> {
        match &self.payload {
            Some(bytes) => String::from_utf8_lossy(bytes),
            None => Cow::Borrowed(""),
        }
    }

    /// Payload bytes persis, `None` jika belum pernah di-set
    #[inline(always)]
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    /// Panjang payload dalam bytes (derived)
    #[inline(always)]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// SHA-256 payload saat ini (derived)
    #[inline(always)]
    pub const fn hash(&self) -> &[u8; 32] {
        &self.hash
    }

    /// Header dari nilai field live
    #[inline(always)]
    pub const fn header(&self) -> Header {
        Header::new(self.type_code, self.size, self.hash)
    }

    /// Header ter-encode, 48 byte
    #[inline(always)]
    pub fn header_bytes(&self) -> [u8; HEADER_SIZE] {
        self.header().encode()
    }

    /// Serialize seluruh pesan: header ‖ payload.
    ///
    /// Ditolak jika payload belum pernah di-set (`IncompleteMessage`) atau
    /// type code tidak terdaftar (`UnregisteredCode`) — envelope transien
    /// boleh punya type invalid, tapi tidak boleh ditransmisikan begitu.
    pub fn as_raw(&self) -> Result<Vec<u8>, ProtocolError> {
        let payload = self.payload.as_ref().ok_or(ProtocolError::IncompleteMessage)?;

        if MessageType::from_code(self.type_code).is_none() {
            return Err(ProtocolError::UnregisteredCode(self.type_code));
        }

        let mut raw = Vec::with_capacity(HEADER_SIZE + payload.len());
        raw.extend_from_slice(&self.header_bytes());
        raw.extend_from_slice(payload);
        Ok(raw)
    }

    /// Content-derived identifier: hex SHA-256 atas `as_raw()`.
    ///
    /// Berubah setiap field header atau payload berubah; dihitung ulang
    /// setiap panggilan, tidak pernah disimpan.
    pub fn id(&self) -> Result<String, ProtocolError> {
        Ok(hex::encode(self.digest()?))
    }

    /// Parse pesan dari raw bytes.
    ///
    /// Input kosong -> `Ok(None)` (null-soft, caller wajib cek). Magic dan
    /// version TIDAK divalidasi di sini. Ukuran SELALU divalidasi terhadap
    /// buffer aktual dan terhadap MAX_MESSAGE_SIZE - tidak ada silent
    /// slicing pada input terpotong.
    pub fn from_raw(input: &[u8]) -> Result<Option<Self>, ProtocolError> {
        if input.is_empty() {
            return Ok(None);
        }

        if input.len() > MAX_MESSAGE_SIZE {
            return Err(ProtocolError::OversizedMessage {
                size: input.len(),
                max: MAX_MESSAGE_SIZE,
            });
        }

        let header = Header::decode(input)?;

        let declared = header.size as usize;
        if header.total_size() > MAX_MESSAGE_SIZE {
            return Err(ProtocolError::OversizedMessage {
                size: header.total_size(),
                max: MAX_MESSAGE_SIZE,
            });
        }

        let available = input.len() - HEADER_SIZE;
        if declared > available {
            return Err(ProtocolError::TruncatedPayload {
                declared,
                actual: available,
            });
        }

        let payload = &input[HEADER_SIZE..HEADER_SIZE + declared];

        Ok(Some(Self {
            type_code: header.type_code,
            size: header.size,
            hash: header.hash,
            payload: Some(payload.to_vec()),
        }))
    }

    /// Cek integritas: hash yang dipegang == SHA-256 payload yang dipegang.
    ///
    /// Selalu true untuk envelope yang dibangun lewat `set_data`; berguna
    /// untuk envelope hasil `from_raw`, yang mengambil hash dari header
    /// apa adanya.
    pub fn verify(&self) -> bool {
        match &self.payload {
            Some(bytes) => sha256(bytes) == self.hash,
            None => false,
        }
    }
}

impl StateVector for Message {
    fn serialize(&self) -> Result<Vec<u8>, ProtocolError> {
        self.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::MAGIC_BYTES;

    #[test]
    fn test_set_data_recomputes_derived_fields() {
        let mut msg = Message::new();
        msg.set_data(b"hello").unwrap();

        assert_eq!(msg.size(), 5);
        assert_eq!(msg.hash(), &sha256(b"hello"));

        // Mutasi payload menimpa derived state tanpa syarat
        msg.set_data(b"world!").unwrap();
        assert_eq!(msg.size(), 6);
        assert_eq!(msg.hash(), &sha256(b"world!"));
    }

    #[test]
    fn test_empty_payload_is_present() {
        let mut msg = Message::new();
        assert_eq!(msg.payload(), None);
        assert_eq!(msg.data(), "");

        msg.set_data(b"").unwrap();
        assert_eq!(msg.payload(), Some(&b""[..]));
        assert_eq!(msg.size(), 0);
        assert_eq!(msg.hash(), &sha256(b""));
    }

    #[test]
    fn test_as_raw_rejects_missing_payload() {
        let mut msg = Message::new();
        msg.set_type("Ping").unwrap();
        assert_eq!(msg.as_raw(), Err(ProtocolError::IncompleteMessage));
    }

    #[test]
    fn test_as_raw_rejects_unset_type() {
        let mut msg = Message::new();
        msg.set_data(b"payload").unwrap();
        assert_eq!(msg.as_raw(), Err(ProtocolError::UnregisteredCode(0)));
    }

    #[test]
    fn test_ping_hello_is_53_bytes() {
        let msg = Message::from_vector(("Ping", b"hello")).unwrap();
        let raw = msg.as_raw().unwrap();

        assert_eq!(raw.len(), 53);
        assert_eq!(&raw[0..4], &MAGIC_BYTES.to_be_bytes());
        assert_eq!(&raw[48..], b"hello");

        let parsed = Message::from_raw(&raw).unwrap().unwrap();
        assert_eq!(parsed.type_name(), "Ping");
        assert_eq!(parsed.data(), "hello");
        assert!(parsed.verify());
    }

    #[test]
    fn test_from_raw_null_soft() {
        assert_eq!(Message::from_raw(&[]), Ok(None));
    }

    #[test]
    fn test_from_raw_truncated() {
        let raw = Message::from_vector(("Ping", b"hello"))
            .unwrap()
            .as_raw()
            .unwrap();

        // Header terpotong
        assert!(matches!(
            Message::from_raw(&raw[..20]),
            Err(ProtocolError::TruncatedHeader { .. })
        ));

        // Payload lebih pendek dari size yang dideklarasikan
        assert_eq!(
            Message::from_raw(&raw[..50]),
            Err(ProtocolError::TruncatedPayload {
                declared: 5,
                actual: 2
            })
        );
    }

    #[test]
    fn test_from_raw_oversized_declared_size() {
        let header = Header::new(crate::protocol::constants::P2P_PING, u32::MAX, sha256(b""));
        let mut raw = header.encode().to_vec();
        raw.push(0);

        assert!(matches!(
            Message::from_raw(&raw),
            Err(ProtocolError::OversizedMessage { .. })
        ));
    }

    #[test]
    fn test_from_raw_tolerates_unregistered_code() {
        // Header dengan kode 0xFFFFFFFF dan payload kosong: parse sukses,
        // type terbaca sebagai label generic, tanpa exception
        let header = Header::new(0xFFFF_FFFF, 0, sha256(b""));
        let msg = Message::from_raw(&header.encode()).unwrap().unwrap();

        assert_eq!(msg.type_name(), "GenericMessage");
        assert_eq!(msg.message_type(), None);
        // Tapi re-transmit ditolak
        assert_eq!(
            msg.as_raw(),
            Err(ProtocolError::UnregisteredCode(0xFFFF_FFFF))
        );
    }

    #[test]
    fn test_id_sensitivity() {
        let a = Message::from_vector(("Ping", b"hello")).unwrap();
        let b = Message::from_vector(("Ping", b"hello")).unwrap();
        assert_eq!(a.id().unwrap(), b.id().unwrap());

        let mut c = a.clone();
        c.set_data(b"hello!").unwrap();
        assert_ne!(a.id().unwrap(), c.id().unwrap());

        let mut d = a.clone();
        d.set_type("Pong").unwrap();
        assert_ne!(a.id().unwrap(), d.id().unwrap());
    }

    #[test]
    fn test_verify_detects_header_payload_mismatch() {
        let msg = Message::from_vector(("Ping", b"hello")).unwrap();
        let mut raw = msg.as_raw().unwrap();
        raw[52] = b'!'; // korupsi byte terakhir payload

        let parsed = Message::from_raw(&raw).unwrap().unwrap();
        assert!(!parsed.verify());
    }
}
