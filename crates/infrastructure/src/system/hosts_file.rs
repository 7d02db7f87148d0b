use std::fs;
use std::net::IpAddr;
use std::path::Path;
use tracing::debug;

#[cfg(unix)]
pub const HOSTS_PATH: &str = "/etc/hosts";
#[cfg(windows)]
pub const HOSTS_PATH: &str = r"C:\Windows\System32\drivers\etc\hosts";
#[cfg(not(any(unix, windows)))]
pub const HOSTS_PATH: &str = "";

/// Static address-to-name table, consulted before DNS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostsFile {
    entries: Vec<(IpAddr, String)>,
}

impl HostsFile {
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No hosts file");
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Self {
        let mut entries = Vec::new();

        for line in content.lines() {
            let line = line.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();

            let Some(ip) = fields.next().and_then(|f| f.parse::<IpAddr>().ok()) else {
                continue;
            };
            for name in fields {
                entries.push((ip, absolute_name(name)));
            }
        }

        Self { entries }
    }

    /// Every name listed for `ip`, in file order.
    pub fn names_for(&self, ip: IpAddr) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for (entry_ip, name) in &self.entries {
            if *entry_ip == ip && !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}

/// Appends the root label so static and DNS answers look alike.
pub fn absolute_name(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
