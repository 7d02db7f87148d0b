pub mod hostname_resolver;
pub mod hosts_file;
pub mod resolv_conf;

pub use hostname_resolver::SystemHostnameResolver;
pub use hosts_file::HostsFile;
pub use resolv_conf::ResolvConf;
