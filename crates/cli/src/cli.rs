use clap::Parser;
use std::path::PathBuf;

const USAGE: &str = "\
Uso:
  Modalità singola: dns-reverse <indirizzo-ip> [dns-server]
  Modalità batch:   dns-reverse -batch <input.csv> <output.csv> [dns-server]

Esempi:
  dns-reverse 8.8.8.8
  dns-reverse 10.157.250.202 10.157.255.22
  dns-reverse -batch ips.csv risultati.csv
  dns-reverse -batch ips.csv risultati.csv 10.157.255.22";

#[derive(Parser, Debug)]
#[command(name = "dns-reverse")]
#[command(version)]
#[command(about = "Reverse DNS (PTR) lookups for one address or a whole file")]
#[command(override_usage = "dns-reverse <ip-address> [dns-server]\n       dns-reverse -batch <input> <output> [dns-server]")]
pub struct Cli {
    /// Batch mode: read addresses from INPUT, write CSV results to OUTPUT
    #[arg(long, num_args = 2, value_names = ["INPUT", "OUTPUT"])]
    pub batch: Option<Vec<PathBuf>>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// `<ip-address> [dns-server]`, or only `[dns-server]` in batch mode.
    /// Anything after those is ignored.
    #[arg(value_name = "ARGS", num_args = 0.., allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Single {
        ip: String,
        dns_server: Option<String>,
    },
    Batch {
        input: PathBuf,
        output: PathBuf,
        dns_server: Option<String>,
    },
}

impl Cli {
    /// `None` when the invocation is incomplete.
    pub fn mode(&self) -> Option<Mode> {
        match &self.batch {
            Some(files) => {
                let [input, output] = files.as_slice() else {
                    return None;
                };
                Some(Mode::Batch {
                    input: input.clone(),
                    output: output.clone(),
                    dns_server: self.args.first().cloned(),
                })
            }
            None => {
                let ip = self.args.first()?.clone();
                Some(Mode::Single {
                    ip,
                    dns_server: self.args.get(1).cloned(),
                })
            }
        }
    }
}

/// Accepts the single-dash `-batch` spelling alongside `--batch`.
///
/// Only the first positional argument selects batch mode; a later `-batch`
/// stays a plain value.
pub fn normalize_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut args = args.into_iter();
    let mut normalized: Vec<String> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        if arg == "--log-level" {
            normalized.push(arg);
            normalized.extend(args.next());
            continue;
        }
        if arg.starts_with("--") {
            normalized.push(arg);
            continue;
        }
        normalized.push(if arg == "-batch" {
            "--batch".to_string()
        } else {
            arg
        });
        break;
    }

    normalized.extend(args);
    normalized
}

pub fn print_usage() {
    println!("{}", USAGE);
}
