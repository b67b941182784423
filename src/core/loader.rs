use crate::core::{ConfigProvider, Fixlet, FixletStore, Storage};
use crate::domain::model::FIELD_COUNT;
use crate::utils::error::{FixletError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

pub struct FixletLoader<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FixletLoader<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Reads the configured file and appends every data row to `store`.
    ///
    /// All-or-nothing: rows are staged first, so a failure anywhere in the
    /// file leaves `store` untouched. Returns the number of rows appended.
    pub fn load_into(&self, store: &mut FixletStore) -> Result<usize> {
        let path = self.config.file_path();
        tracing::debug!("Reading fixlets from: {}", path);

        let data = self.storage.read_file(path)?;
        let staged = self.parse(&data)?;
        let count = staged.len();

        store.extend(staged);
        tracing::info!("📁 Loaded {} fixlets from {}", count, path);
        Ok(count)
    }

    pub fn parse(&self, data: &[u8]) -> Result<Vec<Fixlet>> {
        // csv 對引號很寬鬆，先做嚴格檢查
        check_quoting(data, self.config.delimiter())?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.config.delimiter())
            .trim(if self.config.trim_fields() {
                Trim::All
            } else {
                Trim::None
            })
            .from_reader(data);

        let mut staged = Vec::new();
        for result in reader.records() {
            let record = result?;
            staged.push(fixlet_from_record(&record)?);
        }

        tracing::debug!("Parsed {} data rows", staged.len());
        Ok(staged)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuotedEnd,
    QuotedEndCr,
}

/// Strict RFC 4180 quoting: a quote may only open a field, a quoted field
/// must close, and a closing quote is followed by a delimiter or line end.
fn check_quoting(data: &[u8], delimiter: u8) -> Result<()> {
    let mut state = QuoteState::FieldStart;
    let mut line: u64 = 1;
    let mut quote_line: u64 = 1;

    for &byte in data {
        state = match (state, byte) {
            (QuoteState::FieldStart, b'"') => {
                quote_line = line;
                QuoteState::Quoted
            }
            (QuoteState::Quoted, b'"') => QuoteState::QuotedEnd,
            (QuoteState::QuotedEnd, b'"') => QuoteState::Quoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::Unquoted, b'"') => {
                return Err(FixletError::QuotingError {
                    line,
                    reason: "bare \" in unquoted field",
                });
            }
            (QuoteState::QuotedEnd, b'\r') => QuoteState::QuotedEndCr,
            (QuoteState::QuotedEndCr, b'\n') => QuoteState::FieldStart,
            (QuoteState::QuotedEnd, b) if b != delimiter && b != b'\n' => {
                return Err(FixletError::QuotingError {
                    line,
                    reason: "unexpected character after closing quote",
                });
            }
            (QuoteState::QuotedEndCr, _) => {
                return Err(FixletError::QuotingError {
                    line,
                    reason: "unexpected character after closing quote",
                });
            }
            (_, b) if b == delimiter => QuoteState::FieldStart,
            (_, b'\n') => QuoteState::FieldStart,
            _ => QuoteState::Unquoted,
        };

        if byte == b'\n' {
            line += 1;
        }
    }

    if state == QuoteState::Quoted {
        return Err(FixletError::QuotingError {
            line: quote_line,
            reason: "quoted field is never closed",
        });
    }

    Ok(())
}

fn fixlet_from_record(record: &StringRecord) -> Result<Fixlet> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();

    if record.len() < FIELD_COUNT {
        return Err(FixletError::MalformedRowError {
            line,
            expected: FIELD_COUNT,
            found: record.len(),
        });
    }

    // 無法解析的數量一律視為 0
    let raw_count = &record[4];
    let relevant_computer_count = raw_count.parse::<i64>().unwrap_or_else(|_| {
        tracing::warn!(
            "⚠️ Line {}: RelevantComputerCount '{}' is not an integer, using 0",
            line,
            raw_count
        );
        0
    });

    Ok(Fixlet::new(
        &record[0],
        &record[1],
        &record[2],
        &record[3],
        relevant_computer_count,
    ))
}
