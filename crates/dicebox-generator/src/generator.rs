//! The caller-owned pseudo-random stream.

use dicebox_core::rng::DeterministicRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;
use rand_pcg::{Pcg64, Pcg64Dxsm};
use tracing::debug;

use crate::algorithm::Algorithm;
use crate::lineage::Lineage;

/// Concrete bit-stream behind a `Generator`, one variant per `Algorithm`.
#[derive(Debug)]
enum Backend {
    ChaCha12(ChaCha12Rng),
    Pcg64(Pcg64),
    Pcg64Dxsm(Pcg64Dxsm),
}

impl Backend {
    fn build(algorithm: Algorithm, seed: [u8; 32]) -> Self {
        match algorithm {
            Algorithm::ChaCha12 => Backend::ChaCha12(ChaCha12Rng::from_seed(seed)),
            Algorithm::Pcg64 => Backend::Pcg64(Pcg64::from_seed(seed)),
            Algorithm::Pcg64Dxsm => Backend::Pcg64Dxsm(Pcg64Dxsm::from_seed(seed)),
        }
    }
}

impl RngCore for Backend {
    fn next_u32(&mut self) -> u32 {
        match self {
            Backend::ChaCha12(rng) => rng.next_u32(),
            Backend::Pcg64(rng) => rng.next_u32(),
            Backend::Pcg64Dxsm(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Backend::ChaCha12(rng) => rng.next_u64(),
            Backend::Pcg64(rng) => rng.next_u64(),
            Backend::Pcg64Dxsm(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            Backend::ChaCha12(rng) => rng.fill_bytes(dst),
            Backend::Pcg64(rng) => rng.fill_bytes(dst),
            Backend::Pcg64Dxsm(rng) => rng.fill_bytes(dst),
        }
    }
}

/// A stateful pseudo-random source.
///
/// Two generators built with the same algorithm and seed produce identical
/// output for identical sequences of operations. A generator is owned by
/// whoever requested it; use [`Generator::spawn`] to obtain an independent
/// stream for parallel work instead of sharing one instance.
#[derive(Debug)]
pub struct Generator {
    algorithm: Algorithm,
    lineage: Lineage,
    children_spawned: u64,
    backend: Backend,
}

impl Generator {
    /// Creates a non-reproducible generator seeded from system entropy.
    #[must_use]
    pub fn from_entropy(algorithm: Algorithm) -> Self {
        debug!(%algorithm, "creating generator from system entropy");
        Self::from_lineage(algorithm, Lineage::root(rand::random()))
    }

    /// Creates a reproducible generator from an integer seed.
    #[must_use]
    pub fn seeded(algorithm: Algorithm, seed: u64) -> Self {
        debug!(%algorithm, seed, "creating seeded generator");
        Self::from_lineage(algorithm, Lineage::root(u128::from(seed)))
    }

    fn from_lineage(algorithm: Algorithm, lineage: Lineage) -> Self {
        let backend = Backend::build(algorithm, lineage.seed());
        Self {
            algorithm,
            lineage,
            children_spawned: 0,
            backend,
        }
    }

    /// Derives exactly one child generator.
    ///
    /// The child is seeded from this generator's lineage extended by the
    /// running child count, so siblings never collide. No output is drawn
    /// from this generator's stream; only the child counter advances.
    #[must_use]
    pub fn spawn(&mut self) -> Generator {
        let index = self.children_spawned;
        self.children_spawned += 1;
        let child = Self::from_lineage(self.algorithm, self.lineage.child(index));
        debug!(algorithm = %self.algorithm, spawn_key = ?child.spawn_key(), "spawned generator");
        child
    }

    /// The algorithm backing this generator.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Path of child indices from the root generator to this one.
    #[must_use]
    pub fn spawn_key(&self) -> &[u64] {
        self.lineage.spawn_key()
    }

    /// How many children this generator has spawned.
    #[must_use]
    pub fn children_spawned(&self) -> u64 {
        self.children_spawned
    }
}

impl DeterministicRng for Generator {
    fn next_u64_range(&mut self, min: u64, max: u64) -> u64 {
        self.backend.random_range(min..=max)
    }
}

impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        self.backend.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.backend.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.backend.fill_bytes(dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(generator: &mut Generator, n: usize) -> Vec<u64> {
        (0..n).map(|_| generator.next_u64()).collect()
    }

    fn contains_window(haystack: &[u64], needle: &[u64]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_same_seed_same_sequence_for_every_algorithm() {
        for algorithm in Algorithm::ALL {
            let mut a = Generator::seeded(algorithm, 2024);
            let mut b = Generator::seeded(algorithm, 2024);
            assert_eq!(draws(&mut a, 64), draws(&mut b, 64), "{algorithm}");
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Generator::seeded(Algorithm::Pcg64, 1);
        let mut b = Generator::seeded(Algorithm::Pcg64, 2);
        assert_ne!(draws(&mut a, 16), draws(&mut b, 16));
    }

    #[test]
    fn test_algorithms_diverge_on_same_seed() {
        let mut chacha = Generator::seeded(Algorithm::ChaCha12, 3);
        let mut pcg = Generator::seeded(Algorithm::Pcg64, 3);
        let mut dxsm = Generator::seeded(Algorithm::Pcg64Dxsm, 3);

        let a = draws(&mut chacha, 8);
        let b = draws(&mut pcg, 8);
        let c = draws(&mut dxsm, 8);

        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_entropy_generators_differ() {
        let mut a = Generator::from_entropy(Algorithm::ChaCha12);
        let mut b = Generator::from_entropy(Algorithm::ChaCha12);
        assert_ne!(draws(&mut a, 8), draws(&mut b, 8));
    }

    #[test]
    fn test_seeded_d6_fixture_per_algorithm() {
        let fixtures = [
            (Algorithm::ChaCha12, [3_u64, 2, 2]),
            (Algorithm::Pcg64, [1, 2, 5]),
            (Algorithm::Pcg64Dxsm, [1, 2, 4]),
        ];

        for (algorithm, expected) in fixtures {
            let mut generator = Generator::seeded(algorithm, 42);
            let triple: Vec<u64> = (0..3).map(|_| generator.next_u64_range(1, 6)).collect();
            assert_eq!(triple, expected, "{algorithm}");
        }
    }

    #[test]
    fn test_spawn_leaves_parent_stream_untouched() {
        let mut spawned_from = Generator::seeded(Algorithm::Pcg64Dxsm, 77);
        let mut untouched = Generator::seeded(Algorithm::Pcg64Dxsm, 77);

        let _first = spawned_from.spawn();
        let _second = spawned_from.spawn();

        assert_eq!(draws(&mut spawned_from, 32), draws(&mut untouched, 32));
    }

    #[test]
    fn test_spawned_siblings_and_parent_are_independent() {
        let mut parent = Generator::seeded(Algorithm::ChaCha12, 11);
        let mut first = parent.spawn();
        let mut second = parent.spawn();

        let parent_out = draws(&mut parent, 256);
        let first_out = draws(&mut first, 256);
        let second_out = draws(&mut second, 256);

        for (probe, others) in [
            (&first_out, [&parent_out, &second_out]),
            (&second_out, [&parent_out, &first_out]),
            (&parent_out, [&first_out, &second_out]),
        ] {
            for other in others {
                assert!(!contains_window(other, &probe[..4]), "prefix overlap");
                assert!(!contains_window(other, &probe[probe.len() - 4..]), "suffix overlap");
            }
        }
    }

    #[test]
    fn test_spawn_is_reproducible_under_seed() {
        let mut a = Generator::seeded(Algorithm::Pcg64, 8);
        let mut b = Generator::seeded(Algorithm::Pcg64, 8);

        let mut child_a = a.spawn().spawn();
        let mut child_b = b.spawn().spawn();

        assert_eq!(child_a.spawn_key(), &[0, 0]);
        assert_eq!(draws(&mut child_a, 16), draws(&mut child_b, 16));
    }

    #[test]
    fn test_spawn_keeps_algorithm() {
        let mut parent = Generator::seeded(Algorithm::Pcg64Dxsm, 0);
        assert_eq!(parent.spawn().algorithm(), Algorithm::Pcg64Dxsm);
    }

    #[test]
    fn test_next_u64_range_stays_inclusive() {
        let mut generator = Generator::seeded(Algorithm::ChaCha12, 99);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..1_000 {
            let v = generator.next_u64_range(1, 4);
            assert!((1..=4).contains(&v));
            seen_min |= v == 1;
            seen_max |= v == 4;
        }
        assert!(seen_min && seen_max);
    }
}
