#![allow(dead_code)]

mod dns_server_mock;

pub use dns_server_mock::{encode, response_for, MockBehavior, MockDnsServer};

use hickory_proto::op::{Message, ResponseCode};

pub fn encoded_response(query: &Message, rcode: ResponseCode, names: &[&str]) -> Vec<u8> {
    let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    encode(&response_for(query, query.id(), rcode, &names))
}
