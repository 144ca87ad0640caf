use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

pub fn setup_if_needed() {
    let _ = dotenvy::dotenv();
    let _ = env_logger::builder().is_test(true).try_init();
}

// Seeded so a failing case can be reproduced from the seed alone
pub fn rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Random bytes drawn from `alphabet`, up to `max_len` long.
///
/// A small alphabet makes equal weights and shared prefixes common.
pub fn random_bytes(rng: &mut impl Rng, alphabet: &[u8], max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);

    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Random bytes over the whole byte range, up to `max_len` long.
pub fn random_any_bytes(rng: &mut impl Rng, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);

    (0..len).map(|_| rng.gen()).collect()
}
