//! StateVector: capability untuk entitas yang punya bentuk serial
//!
//! Entitas yang implement trait ini bisa di-serialize, punya digest
//! content-derived, dan bisa digabung dengan instance lain untuk menghitung
//! resulting state. Composition lewat trait, bukan inheritance.

use sha2::{Digest, Sha256};

use super::error::ProtocolError;

/// Entitas dengan bentuk serial dan identitas turunan konten
pub trait StateVector {
    /// Bentuk serial lengkap entitas
    fn serialize(&self) -> Result<Vec<u8>, ProtocolError>;

    /// SHA-256 atas bentuk serial. Tidak di-cache - selalu mengikuti
    /// state saat ini.
    fn digest(&self) -> Result<[u8; 32], ProtocolError> {
        let mut hasher = Sha256::new();
        hasher.update(self.serialize()?);
        Ok(hasher.finalize().into())
    }

    /// Resulting state dari penggabungan dua vector: SHA-256 atas
    /// konkatenasi digest keduanya, urutan berpengaruh.
    fn combine(&self, other: &Self) -> Result<[u8; 32], ProtocolError>
    where
        Self: Sized,
    {
        let mut hasher = Sha256::new();
        hasher.update(self.digest()?);
        hasher.update(other.digest()?);
        Ok(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blob(Vec<u8>);

    impl StateVector for Blob {
        fn serialize(&self) -> Result<Vec<u8>, ProtocolError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_digest_follows_content() {
        let a = Blob(b"state-a".to_vec());
        let b = Blob(b"state-a".to_vec());
        let c = Blob(b"state-b".to_vec());

        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
        assert_ne!(a.digest().unwrap(), c.digest().unwrap());
    }

    #[test]
    fn test_combine_is_order_sensitive() {
        let a = Blob(b"left".to_vec());
        let b = Blob(b"right".to_vec());

        let ab = a.combine(&b).unwrap();
        let ba = b.combine(&a).unwrap();
        assert_ne!(ab, ba);

        // Deterministic
        assert_eq!(ab, a.combine(&b).unwrap());
    }
}
