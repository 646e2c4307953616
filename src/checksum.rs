//! Weighted modulus check digit shared by validation and generation.
//!
//! The nine reference digits of a UTR are multiplied by a fixed positional
//! weight, summed and reduced modulo 97. The check digit is then read off the
//! last decimal digit of the remainder:
//!
//! `check = (9 - (remainder mod 10) + 10) mod 10`
//!
//! Worked example for reference digits `123456789`:
//! `6·1 + 7·2 + 8·3 + 9·4 + 10·5 + 5·6 + 4·7 + 3·8 + 2·9 = 230`,
//! `230 mod 97 = 36`, `(9 - 6 + 10) mod 10 = 3`, giving `3123456789`.

pub const REFERENCE_LEN: usize = 9;

pub const UTR_LEN: usize = REFERENCE_LEN + 1;

pub const WEIGHTS: [u32; REFERENCE_LEN] = [6, 7, 8, 9, 10, 5, 4, 3, 2];

pub const MODULUS: u32 = 97;

pub fn weighted_sum(reference: &[u8; REFERENCE_LEN]) -> u32 {
    reference
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum()
}

pub fn check_digit_for_remainder(remainder: u32) -> u8 {
    ((9 + 10 - remainder % 10) % 10) as u8
}

// Digits must already be in 0..=9.
pub fn check_digit(reference: &[u8; REFERENCE_LEN]) -> u8 {
    check_digit_for_remainder(weighted_sum(reference) % MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_matches() {
        let reference = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(weighted_sum(&reference), 230);
        assert_eq!(weighted_sum(&reference) % MODULUS, 36);
        assert_eq!(check_digit(&reference), 3);
    }

    #[test]
    fn all_zero_reference() {
        // sum 0, remainder 0 -> (9 - 0 + 10) % 10
        assert_eq!(check_digit(&[0; REFERENCE_LEN]), 9);
    }

    #[test]
    fn all_nine_reference() {
        // 9 * 54 = 486, 486 % 97 = 1
        let reference = [9; REFERENCE_LEN];
        assert_eq!(weighted_sum(&reference), 486);
        assert_eq!(check_digit(&reference), 8);
    }

    #[test]
    fn check_digit_is_deterministic() {
        let reference = [4, 0, 7, 1, 9, 3, 3, 8, 2];
        let first = check_digit(&reference);
        for _ in 0..100 {
            assert_eq!(check_digit(&reference), first);
        }
    }

    #[test]
    fn remainder_table_is_total() {
        for remainder in 0..MODULUS {
            let digit = check_digit_for_remainder(remainder);
            assert!(digit <= 9);
            assert_eq!((u32::from(digit) + remainder % 10) % 10, 9);
        }
    }

    #[test]
    fn every_weight_is_live() {
        for weight in WEIGHTS {
            assert_ne!(weight % MODULUS, 0);
            let mut seen = Vec::new();
            for digit in 0..10u32 {
                let contribution = (weight * digit) % MODULUS;
                assert!(!seen.contains(&contribution));
                seen.push(contribution);
            }
        }
    }

    #[test]
    fn every_position_detects_some_substitution() {
        let reference = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let original = check_digit(&reference);
        for position in 0..REFERENCE_LEN {
            let detected = (0..10u8)
                .filter(|digit| *digit != reference[position])
                .any(|digit| {
                    let mut corrupted = reference;
                    corrupted[position] = digit;
                    check_digit(&corrupted) != original
                });
            assert!(detected, "position {position} never changes the check digit");
        }
    }
}
