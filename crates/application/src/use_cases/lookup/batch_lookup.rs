use super::ReverseLookupUseCase;
use crate::ports::{BatchProgress, ResultSink};
use dns_reverse_domain::{BatchSummary, DomainError, InputLine, LookupRow};
use std::io::BufRead;
use tracing::{debug, info, warn};

pub struct BatchLookupUseCase {
    lookup: ReverseLookupUseCase,
}

impl BatchLookupUseCase {
    pub fn new(lookup: ReverseLookupUseCase) -> Self {
        Self { lookup }
    }

    /// Resolves every address of `input` in order, one row per non-skipped line.
    ///
    /// Per-line failures become rows, including lines that are not valid UTF-8.
    /// Only an I/O error from the input stream or the sink aborts the run; rows
    /// written up to that point are flushed first.
    pub async fn execute<I: BufRead>(
        &self,
        mut input: I,
        sink: &mut dyn ResultSink,
        progress: &mut dyn BatchProgress,
    ) -> Result<BatchSummary, DomainError> {
        sink.write_header()?;

        let mut summary = BatchSummary::default();
        let mut line_number = 0u64;

        let mut buf = Vec::new();

        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(line_number = line_number + 1, error = %e, "Input stream failed");
                    sink.flush()?;
                    return Err(DomainError::InputRead(e.to_string()));
                }
            }
            line_number += 1;

            // Lines are bytes; undecodable ones end up as invalid addresses.
            let line = String::from_utf8_lossy(&buf);

            let row = match InputLine::parse(&line) {
                InputLine::Skip => continue,
                InputLine::Invalid { raw } => {
                    debug!(line_number, input = %raw, "Skipping malformed address");
                    LookupRow::invalid(raw)
                }
                InputLine::Address { raw, ip } => match self.lookup.resolve(ip).await {
                    Ok(names) => LookupRow::resolved(raw, names),
                    Err(e) => LookupRow::failed(raw, &e),
                },
            };

            summary.record(&row);
            progress.row_processed(line_number, &row);

            if let Err(e) = sink.write_row(&row) {
                // Best effort; the write error is the one reported.
                let _ = sink.flush();
                return Err(e);
            }
        }

        sink.flush()?;

        info!(
            processed = summary.processed,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Batch finished"
        );

        Ok(summary)
    }
}
