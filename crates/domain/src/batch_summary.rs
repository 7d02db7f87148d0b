use crate::LookupRow;

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: u64,
    pub succeeded: u64,
    pub failed: u64,
}

impl BatchSummary {
    pub fn record(&mut self, row: &LookupRow) {
        self.processed += 1;
        if row.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.succeeded + self.failed == self.processed
    }
}
