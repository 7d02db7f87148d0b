use dns_reverse_domain::InputLine;
use std::net::IpAddr;

#[test]
fn test_blank_lines_are_skipped() {
    assert_eq!(InputLine::parse(""), InputLine::Skip);
    assert_eq!(InputLine::parse("   \t"), InputLine::Skip);
}

#[test]
fn test_comment_lines_are_skipped() {
    assert_eq!(InputLine::parse("# gateways"), InputLine::Skip);
    assert_eq!(InputLine::parse("   # indented comment"), InputLine::Skip);
    assert_eq!(InputLine::parse("#8.8.8.8"), InputLine::Skip);
}

#[test]
fn test_valid_ipv4_is_trimmed() {
    let expected: IpAddr = "8.8.8.8".parse().unwrap();
    assert_eq!(
        InputLine::parse("  8.8.8.8\r"),
        InputLine::Address {
            raw: "8.8.8.8".to_string(),
            ip: expected,
        }
    );
}

#[test]
fn test_valid_ipv6() {
    let line = InputLine::parse("2001:4860:4860::8844");
    assert!(matches!(line, InputLine::Address { ip: IpAddr::V6(_), .. }));
}

#[test]
fn test_malformed_lines_are_invalid() {
    for raw in ["not-an-ip", "256.1.1.1", "8.8.8", "8.8.8.8/24", "8.8.8.8,extra"] {
        assert_eq!(
            InputLine::parse(raw),
            InputLine::Invalid {
                raw: raw.to_string()
            },
            "{raw} should be invalid"
        );
    }
}
