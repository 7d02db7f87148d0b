use crate::bootstrap;
use crate::di::DnsServices;
use anyhow::anyhow;
use dns_reverse_application::use_cases::ReverseLookupUseCase;
use dns_reverse_domain::LookupTimeouts;

pub async fn run(ip_arg: &str, dns_server: Option<&str>) -> anyhow::Result<()> {
    let ip = ReverseLookupUseCase::parse_ip(ip_arg)
        .map_err(|_| anyhow!("Errore: '{}' non è un indirizzo IP valido", ip_arg))?;

    let config = bootstrap::resolver_config(dns_server)?;
    let services = DnsServices::new(&config, LookupTimeouts::default());

    println!("Ricerca reverse DNS per {}...", ip_arg);

    let names = services
        .reverse_lookup()
        .resolve(ip)
        .await
        .map_err(|e| anyhow!("Errore durante la ricerca: {}", e))?;

    if names.is_empty() {
        println!("Nessun nome trovato per questo indirizzo IP");
    } else {
        println!("\nNomi trovati per {}:", ip_arg);
        for (i, name) in names.iter().enumerate() {
            println!("  {}. {}", i + 1, name);
        }
    }

    Ok(())
}
