//! CSV writer for batch results
//!
//! RFC 4180 quoting with `\n` record terminators. A field is quoted when it
//! holds a delimiter, a quote, a line break, or starts with whitespace.

use dns_reverse_application::ports::ResultSink;
use dns_reverse_domain::{DomainError, LookupRow};
use std::borrow::Cow;
use std::io::{BufWriter, Write};

pub const CSV_HEADER: [&str; 3] = ["IP", "Hostname", "Status"];

const DELIMITER: char = ',';

pub struct CsvResultSink<W: Write> {
    writer: BufWriter<W>,
    rows_written: u64,
}

impl<W: Write> CsvResultSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            rows_written: 0,
        }
    }

    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    pub fn into_inner(self) -> Result<W, DomainError> {
        self.writer
            .into_inner()
            .map_err(|e| DomainError::OutputWrite(e.error().to_string()))
    }

    fn write_record<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<(), DomainError> {
        let mut line = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push(DELIMITER);
            }
            line.push_str(&escape_field(field.as_ref()));
        }
        line.push('\n');

        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| DomainError::OutputWrite(e.to_string()))
    }
}

impl<W: Write> ResultSink for CsvResultSink<W> {
    fn write_header(&mut self) -> Result<(), DomainError> {
        self.write_record(&CSV_HEADER)
    }

    fn write_row(&mut self, row: &LookupRow) -> Result<(), DomainError> {
        self.write_record(&row.to_record())?;
        self.rows_written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        self.writer
            .flush()
            .map_err(|e| DomainError::OutputWrite(e.to_string()))
    }
}

pub fn escape_field(field: &str) -> Cow<'_, str> {
    if !needs_quotes(field) {
        return Cow::Borrowed(field);
    }
    Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
}

fn needs_quotes(field: &str) -> bool {
    if field.is_empty() {
        return false;
    }
    if field.contains([DELIMITER, '"', '\r', '\n']) {
        return true;
    }
    field.starts_with(char::is_whitespace)
}
