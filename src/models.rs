use crate::checksum::{check_digit, REFERENCE_LEN, UTR_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtrCheckResult {
    pub is_valid: bool,
    pub utr_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtrGenerateResult {
    pub utr_number: String,
}

// Structural only; the checksum is checked by `is_consistent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utr {
    check_digit: u8,
    reference: [u8; REFERENCE_LEN],
}

impl Utr {
    pub fn parse(candidate: &str) -> Option<Self> {
        let bytes = candidate.trim().as_bytes();
        if bytes.len() != UTR_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let mut reference = [0u8; REFERENCE_LEN];
        for (slot, byte) in reference.iter_mut().zip(&bytes[1..]) {
            *slot = byte - b'0';
        }
        Some(Self {
            check_digit: bytes[0] - b'0',
            reference,
        })
    }

    pub fn from_reference(reference: [u8; REFERENCE_LEN]) -> Option<Self> {
        if reference.iter().any(|digit| *digit > 9) {
            return None;
        }
        Some(Self {
            check_digit: check_digit(&reference),
            reference,
        })
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    pub fn reference(&self) -> &[u8; REFERENCE_LEN] {
        &self.reference
    }

    pub fn is_consistent(&self) -> bool {
        check_digit(&self.reference) == self.check_digit
    }
}

impl fmt::Display for Utr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.check_digit)?;
        for digit in &self.reference {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
