use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::PTR;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// NOERROR with one PTR answer per name, in order.
    Answer(Vec<String>),
    /// Empty answer section with the given code.
    Rcode(ResponseCode),
    /// Never reply.
    Silent,
    /// First a reply with a wrong ID, then the real answer.
    WrongIdFirst(Vec<String>),
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        counter.fetch_add(1, Ordering::SeqCst);

                        for response in Self::build_responses(&buf[..len], &behavior) {
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_responses(query_bytes: &[u8], behavior: &MockBehavior) -> Vec<Vec<u8>> {
        let Ok(query) = Message::from_vec(query_bytes) else {
            return vec![];
        };

        match behavior {
            MockBehavior::Answer(names) => {
                vec![encode(&response_for(&query, query.id(), ResponseCode::NoError, names))]
            }
            MockBehavior::Rcode(rcode) => {
                vec![encode(&response_for(&query, query.id(), *rcode, &[]))]
            }
            MockBehavior::Silent => vec![],
            MockBehavior::WrongIdFirst(names) => vec![
                encode(&response_for(
                    &query,
                    query.id().wrapping_add(1),
                    ResponseCode::NoError,
                    &["spoofed.example.".to_string()],
                )),
                encode(&response_for(&query, query.id(), ResponseCode::NoError, names)),
            ],
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn response_for(query: &Message, id: u16, rcode: ResponseCode, names: &[String]) -> Message {
    let mut response = Message::new(id, MessageType::Response, OpCode::Query);
    response.set_recursion_desired(true);
    response.set_recursion_available(true);
    response.set_response_code(rcode);

    if let Some(question) = query.queries().first() {
        response.add_query(question.clone());

        for name in names {
            let target = Name::from_str(name).unwrap();
            response.add_answer(Record::from_rdata(
                question.name().clone(),
                300,
                RData::PTR(PTR(target)),
            ));
        }
    }

    response
}

pub fn encode(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}
