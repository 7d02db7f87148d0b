use std::net::IpAddr;

/// Classification of one raw line of a batch input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputLine {
    /// Blank line or `#` comment.
    Skip,
    Address { raw: String, ip: IpAddr },
    Invalid { raw: String },
}

impl InputLine {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            return InputLine::Skip;
        }

        match trimmed.parse::<IpAddr>() {
            Ok(ip) => InputLine::Address {
                raw: trimmed.to_string(),
                ip,
            },
            Err(_) => InputLine::Invalid {
                raw: trimmed.to_string(),
            },
        }
    }
}
