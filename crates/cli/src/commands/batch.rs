use crate::bootstrap;
use crate::di::DnsServices;
use anyhow::{anyhow, Context};
use dns_reverse_application::ports::BatchProgress;
use dns_reverse_domain::{BatchSummary, DomainError, LookupRow, LookupStatus, LookupTimeouts};
use dns_reverse_infrastructure::output::CsvResultSink;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

struct ConsoleProgress;

impl BatchProgress for ConsoleProgress {
    fn row_processed(&mut self, line_number: u64, row: &LookupRow) {
        match &row.status {
            LookupStatus::Ok => {
                println!("  [{}] {} -> {}", line_number, row.ip, row.hostname_field())
            }
            LookupStatus::NoHostname => {
                println!("  [{}] {} - Nessun hostname trovato", line_number, row.ip)
            }
            LookupStatus::InvalidIp => println!("  [{}] {} - IP non valido", line_number, row.ip),
            LookupStatus::Failed(message) => {
                println!("  [{}] {} - Errore: {}", line_number, row.ip, message)
            }
        }
    }
}

pub async fn run(input: &Path, output: &Path, dns_server: Option<&str>) -> anyhow::Result<()> {
    let config = bootstrap::resolver_config(dns_server)?;

    let input_file = File::open(input).with_context(|| {
        format!(
            "Errore nell'aprire il file di input '{}'",
            input.display()
        )
    })?;

    let output_file = File::create(output).with_context(|| {
        format!(
            "Errore nella creazione del file di output '{}'",
            output.display()
        )
    })?;

    let services = DnsServices::new(&config, LookupTimeouts::default());
    let mut sink = CsvResultSink::new(output_file);

    println!("\nElaborazione del file {}...", input.display());

    let summary = services
        .batch_lookup()
        .execute(BufReader::new(input_file), &mut sink, &mut ConsoleProgress)
        .await
        .map_err(|e| match e {
            DomainError::InputRead(reason) => anyhow!("Errore nella lettura del file: {}", reason),
            DomainError::OutputWrite(reason) => anyhow!(
                "Errore nella scrittura del file di output '{}': {}",
                output.display(),
                reason
            ),
            other => anyhow!(other),
        })?;

    let rows = sink.rows_written();
    sink.into_inner()
        .and_then(|file| {
            file.sync_all()
                .map_err(|e| DomainError::OutputWrite(e.to_string()))
        })
        .map_err(|e| {
            anyhow!(
                "Errore nella scrittura del file di output '{}': {}",
                output.display(),
                e
            )
        })?;
    debug!(rows, output = %output.display(), "Output file closed");

    print_summary(&summary, output);
    Ok(())
}

fn print_summary(summary: &BatchSummary, output: &Path) {
    println!("\n✓ Completato!");
    println!("  Totale IP processati: {}", summary.processed);
    println!("  Successo: {}", summary.succeeded);
    println!("  Errori: {}", summary.failed);
    println!("  Risultati salvati in: {}", output.display());
}
