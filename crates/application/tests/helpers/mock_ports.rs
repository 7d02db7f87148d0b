use async_trait::async_trait;
use dns_reverse_application::ports::{BatchProgress, ResultSink, ReverseResolver};
use dns_reverse_domain::{DomainError, LookupRow};
use std::collections::HashMap;
use std::io::{self, BufReader, Cursor, Read};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
pub struct MockReverseResolver {
    responses: Arc<Mutex<HashMap<IpAddr, Result<Vec<String>, DomainError>>>>,
    calls: Arc<Mutex<Vec<IpAddr>>>,
    delay: Option<Duration>,
}

impl MockReverseResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn set_names(&self, ip: &str, names: &[&str]) {
        self.responses.lock().unwrap().insert(
            ip.parse().unwrap(),
            Ok(names.iter().map(|n| n.to_string()).collect()),
        );
    }

    pub fn set_error(&self, ip: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(ip.parse().unwrap(), Err(error));
    }

    pub fn calls(&self) -> Vec<IpAddr> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReverseResolver for MockReverseResolver {
    async fn reverse_lookup(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        self.calls.lock().unwrap().push(ip);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .lock()
            .unwrap()
            .get(&ip)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

#[derive(Default)]
pub struct MemorySink {
    pub header_written: bool,
    pub rows: Vec<[String; 3]>,
    pub flushes: usize,
    pub fail_after: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(rows: usize) -> Self {
        Self {
            fail_after: Some(rows),
            ..Self::default()
        }
    }

    pub fn statuses(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r[2].as_str()).collect()
    }
}

impl ResultSink for MemorySink {
    fn write_header(&mut self) -> Result<(), DomainError> {
        assert!(self.rows.is_empty(), "header must precede rows");
        self.header_written = true;
        Ok(())
    }

    fn write_row(&mut self, row: &LookupRow) -> Result<(), DomainError> {
        if self.fail_after == Some(self.rows.len()) {
            return Err(DomainError::OutputWrite("disk full".to_string()));
        }
        self.rows.push(row.to_record());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        self.flushes += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub events: Vec<(u64, LookupRow)>,
}

impl BatchProgress for RecordingProgress {
    fn row_processed(&mut self, line_number: u64, row: &LookupRow) {
        self.events.push((line_number, row.clone()));
    }
}

/// Yields `data`, then fails every further read.
pub struct BrokenStream {
    data: Cursor<Vec<u8>>,
}

impl BrokenStream {
    pub fn after(data: &[u8]) -> BufReader<Self> {
        BufReader::new(Self {
            data: Cursor::new(data.to_vec()),
        })
    }
}

impl Read for BrokenStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::other("device disconnected")),
            n => Ok(n),
        }
    }
}
