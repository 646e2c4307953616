use crate::models::{Utr, UtrCheckResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStatus {
    Valid,
    Malformed,
    ChecksumMismatch,
}

/// Classifies a candidate. Only the audit summary looks past `Valid`.
pub fn classify(candidate: &str) -> CandidateStatus {
    match Utr::parse(candidate) {
        None => CandidateStatus::Malformed,
        Some(utr) if utr.is_consistent() => CandidateStatus::Valid,
        Some(_) => CandidateStatus::ChecksumMismatch,
    }
}

/// Returns true when `candidate` is ten digits (after trimming) with a matching check digit.
pub fn validate(candidate: &str) -> bool {
    classify(candidate) == CandidateStatus::Valid
}

pub fn check_utr(candidate: &str) -> UtrCheckResult {
    UtrCheckResult {
        is_valid: validate(candidate),
        utr_number: candidate.to_string(),
    }
}

/// Fails when `strict` is set and any result is invalid; lenient runs always pass.
pub fn enforce_strict(results: &[UtrCheckResult], strict: bool) -> Result<(), String> {
    let invalid = results.iter().filter(|result| !result.is_valid).count();
    log::debug!("Checked {} candidate(s), {} invalid", results.len(), invalid);
    if strict && invalid > 0 {
        return Err(format!("{} of {} candidate(s) invalid", invalid, results.len()));
    }
    Ok(())
}
