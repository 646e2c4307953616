use rand::Rng;

/// Draws `N` digits uniformly and independently from `0..10`.
pub fn random_digits<R: Rng + ?Sized, const N: usize>(rng: &mut R) -> [u8; N] {
    let mut out = [0u8; N];
    for slot in out.iter_mut() {
        *slot = rng.gen_range(0..10);
    }
    out
}

pub fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}
