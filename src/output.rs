use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}

/// Writes `records` to `output`, or to stdout when no path is given.
pub fn write_records<T: Serialize>(
    records: &[T],
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), String> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    create_dir_all(parent).map_err(|err| err.to_string())?;
                }
            }
            let file = File::create(path)
                .map_err(|err| format!("failed to create {}: {}", path.display(), err))?;
            write_to(BufWriter::new(file), records, format)
        }
        None => write_to(io::stdout().lock(), records, format),
    }
}

pub fn write_to<W: Write, T: Serialize>(
    writer: W,
    records: &[T],
    format: OutputFormat,
) -> Result<(), String> {
    match format {
        OutputFormat::Json => write_json_lines(writer, records),
        OutputFormat::Csv => write_csv(writer, records),
    }
}

fn write_json_lines<W: Write, T: Serialize>(mut writer: W, records: &[T]) -> Result<(), String> {
    for record in records {
        serde_json::to_writer(&mut writer, record).map_err(|err| err.to_string())?;
        writer.write_all(b"\n").map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

fn write_csv<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UtrCheckResult, UtrGenerateResult};

    fn render<T: Serialize>(records: &[T], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_to(&mut buf, records, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample_checks() -> Vec<UtrCheckResult> {
        vec![
            UtrCheckResult {
                is_valid: true,
                utr_number: "3123456789".to_string(),
            },
            UtrCheckResult {
                is_valid: false,
                utr_number: "12A".to_string(),
            },
        ]
    }

    #[test]
    fn json_lines_one_record_per_line() {
        let out = render(&sample_checks(), OutputFormat::Json);
        assert_eq!(
            out,
            "{\"isValid\":true,\"utrNumber\":\"3123456789\"}\n{\"isValid\":false,\"utrNumber\":\"12A\"}\n"
        );
    }

    #[test]
    fn csv_uses_camel_case_headers() {
        let out = render(&sample_checks(), OutputFormat::Csv);
        assert_eq!(out, "isValid,utrNumber\ntrue,3123456789\nfalse,12A\n");

        let generated = vec![UtrGenerateResult {
            utr_number: "9000000000".to_string(),
        }];
        assert_eq!(
            render(&generated, OutputFormat::Csv),
            "utrNumber\n9000000000\n"
        );
    }

    #[test]
    fn file_output_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("utr-tools-out-{}", std::process::id()));
        let path = dir.join("nested").join("generated.jsonl");
        let generated = vec![UtrGenerateResult {
            utr_number: "3123456789".to_string(),
        }];

        write_records(&generated, OutputFormat::Json, Some(&path)).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert_eq!(content, "{\"utrNumber\":\"3123456789\"}\n");
    }
}
