use dns_reverse_domain::LookupRow;

/// Receives each row as soon as it is produced. `line_number` is the
/// 1-based physical line of the input, comments and blanks included.
pub trait BatchProgress {
    fn row_processed(&mut self, line_number: u64, row: &LookupRow);
}

impl BatchProgress for () {
    fn row_processed(&mut self, _line_number: u64, _row: &LookupRow) {}
}
