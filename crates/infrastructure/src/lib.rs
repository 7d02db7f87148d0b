//! dns-reverse infrastructure: resolvers, DNS wire codec and result output.
pub mod dns;
pub mod output;
pub mod system;
