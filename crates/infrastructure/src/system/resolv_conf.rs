use std::fs;
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// glibc's `RES_TIMEOUT`.
const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_ATTEMPT_TIMEOUT_SECS: u64 = 30;

/// The parts of resolv.conf that matter for PTR lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvConf {
    pub nameservers: Vec<IpAddr>,
    /// Per-nameserver wait (`options timeout:N`).
    pub attempt_timeout: Duration,
}

impl Default for ResolvConf {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }
}

impl ResolvConf {
    /// Reads `path`; a missing or unreadable file yields no nameservers.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No resolver configuration");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Self {
        let mut conf = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("nameserver") => {
                    if let Some(ip) = parts.next().and_then(parse_nameserver) {
                        if !conf.nameservers.contains(&ip) {
                            conf.nameservers.push(ip);
                        }
                    }
                }
                Some("options") => {
                    for option in parts {
                        if let Some(secs) = option
                            .strip_prefix("timeout:")
                            .and_then(|v| v.parse::<u64>().ok())
                        {
                            let secs = secs.clamp(1, MAX_ATTEMPT_TIMEOUT_SECS);
                            conf.attempt_timeout = Duration::from_secs(secs);
                        }
                    }
                }
                _ => {}
            }
        }

        conf
    }
}

fn parse_nameserver(raw: &str) -> Option<IpAddr> {
    // Scoped link-local entries (`fe80::1%eth0`) need an interface index.
    if raw.contains('%') {
        debug!(nameserver = raw, "Skipping scoped nameserver");
        return None;
    }
    raw.parse().ok()
}
