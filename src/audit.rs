use crate::models::UtrCheckResult;
use crate::validator::{classify, CandidateStatus};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct AuditReport {
    pub total: usize,
    pub valid: usize,
    pub malformed: usize,
    pub checksum_mismatch: usize,
    pub results: Vec<UtrCheckResult>,
}

impl AuditReport {
    pub fn invalid(&self) -> usize {
        self.malformed + self.checksum_mismatch
    }
}

pub fn audit_candidates<I, S>(candidates: I) -> AuditReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = AuditReport {
        total: 0,
        valid: 0,
        malformed: 0,
        checksum_mismatch: 0,
        results: Vec::new(),
    };

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let status = classify(candidate);
        report.total += 1;
        match status {
            CandidateStatus::Valid => report.valid += 1,
            CandidateStatus::Malformed => report.malformed += 1,
            CandidateStatus::ChecksumMismatch => report.checksum_mismatch += 1,
        }
        report.results.push(UtrCheckResult {
            is_valid: status == CandidateStatus::Valid,
            utr_number: candidate.to_string(),
        });
    }

    report
}

/// One candidate per line; blank lines and `#` comments are skipped.
pub fn read_candidates(path: &Path) -> Result<Vec<String>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    Ok(content
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(str::to_string)
        .collect())
}
