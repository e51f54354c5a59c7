//! Seed lineage: root entropy plus the spawn path that led to a generator.

use sha2::{Digest, Sha256};

/// Where a generator's seed comes from.
///
/// Two lineages with equal entropy and spawn key always derive the same
/// backend seed. Children extend the parent's key by one index, so no two
/// members of a spawn tree share a seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Lineage {
    entropy: u128,
    spawn_key: Vec<u64>,
}

impl Lineage {
    pub(crate) fn root(entropy: u128) -> Self {
        Self {
            entropy,
            spawn_key: Vec::new(),
        }
    }

    pub(crate) fn child(&self, index: u64) -> Self {
        let mut spawn_key = self.spawn_key.clone();
        spawn_key.push(index);
        Self {
            entropy: self.entropy,
            spawn_key,
        }
    }

    pub(crate) fn spawn_key(&self) -> &[u64] {
        &self.spawn_key
    }

    /// 32 bytes of backend seed material.
    pub(crate) fn seed(&self) -> [u8; 32] {
        derive_seed(self.entropy, &self.spawn_key)
    }
}

/// SHA-256 over the little-endian entropy followed by each key index.
pub(crate) fn derive_seed(entropy: u128, spawn_key: &[u64]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(entropy.to_le_bytes());
    for index in spawn_key {
        hasher.update(index.to_le_bytes());
    }
    hasher.finalize().into()
}
