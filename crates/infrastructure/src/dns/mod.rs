pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use forwarding::{MessageBuilder, PtrResponse, ResponseParser};
pub use resolver::{Resolver, UpstreamPtrResolver};
pub use transport::UdpTransport;
