//! RngSeed - доменный seed для RNG раундов.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32])
//!   - делать детерминированное hash-reseeding на каждый раунд:
//!         new = H(domain || old || session_id || round_id)
//!   - публиковать коммитмент до раздачи и проверять его после раскрытия seed:
//!         commitment = H(seed || bet_type)
//!   - создавать DeterministicRng из seed
//!
//! Это даёт воспроизводимость и аудит раунда, но не криптографическую
//! гарантию случайности.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::bet::BetType;
use crate::domain::{RoundId, SessionId};
use crate::infra::rng::DeterministicRng;

const DOMAIN_TAG: &[u8] = b"BACCARAT_ENGINE_RNG_V1";

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретного раунда сессии.
    pub fn derive(&self, session_id: SessionId, round_id: RoundId) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_TAG);
        hasher.update(self.bytes);
        hasher.update(session_id.to_le_bytes());
        hasher.update(round_id.to_le_bytes());
        Self {
            bytes: hasher.finalize().into(),
        }
    }

    /// Коммитмент ставки: H(seed || метка типа ставки).
    pub fn commitment(&self, bet_type: BetType) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.bytes);
        hasher.update(bet_type.label().as_bytes());
        hasher.finalize().into()
    }

    /// Совпадает ли раскрытый seed с ранее опубликованным коммитментом.
    pub fn verify_commitment(&self, bet_type: BetType, commitment: &[u8; 32]) -> bool {
        &self.commitment(bet_type) == commitment
    }

    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }

    /// Hex-строка seed без префикса (для раскрытия после раунда).
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}
