use crate::checksum::{check_digit, REFERENCE_LEN};
use crate::models::UtrGenerateResult;
use crate::util::random_digits;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Mints a UTR from the supplied digit source.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let reference: [u8; REFERENCE_LEN] = random_digits(rng);
    let mut out = String::with_capacity(REFERENCE_LEN + 1);
    out.push(char::from(b'0' + check_digit(&reference)));
    for digit in reference {
        out.push(char::from(b'0' + digit));
    }
    out
}

/// Mints a UTR from the calling thread's generator.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

pub fn generate_utr() -> UtrGenerateResult {
    UtrGenerateResult {
        utr_number: generate(),
    }
}

/// Largest batch held in memory at once.
pub const MAX_BATCH: usize = 1_000_000;

/// Draws `count` UTRs from a ChaCha stream seeded with `seed`.
pub fn generate_batch(count: usize, seed: u64) -> Result<Vec<UtrGenerateResult>, String> {
    if count == 0 {
        return Err("count must be at least 1".to_string());
    }
    if count > MAX_BATCH {
        return Err(format!("count must be at most {}", MAX_BATCH));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(UtrGenerateResult {
            utr_number: generate_with(&mut rng),
        });
    }
    log::debug!("generated {} UTR(s) from seed {}", out.len(), seed);
    Ok(out)
}
