#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock does with an incoming query.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Respond with one A record for the queried name.
    Answer(Ipv4Addr),
    /// Swallow the query; the client's timeout has to fire.
    Silent,
    /// Respond with a corrupted transaction ID.
    WrongId,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Start on an ephemeral loopback port.
    pub async fn start(behavior: MockBehavior) -> Result<(Self, SocketAddr), std::io::Error> {
        Self::start_at(behavior, Ipv4Addr::LOCALHOST, 0).await
    }

    /// Start on a specific loopback address and port. Several servers on
    /// distinct 127.0.0.x addresses can share one port, which is how the
    /// failover tests present multiple "servers" to the client.
    pub async fn start_at(
        behavior: MockBehavior,
        ip: Ipv4Addr,
        port: u16,
    ) -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::new(IpAddr::V4(ip), port)).await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = build_response(behavior, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
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

fn build_response(behavior: MockBehavior, query_bytes: &[u8]) -> Option<Vec<u8>> {
    let query = Message::from_vec(query_bytes).ok()?;
    let question = query.queries().first()?.clone();

    let (id, address) = match behavior {
        MockBehavior::Silent => return None,
        MockBehavior::Answer(ip) => (query.id(), ip),
        MockBehavior::WrongId => (query.id().wrapping_add(1), Ipv4Addr::new(192, 0, 2, 1)),
    };

    let answer = Record::from_rdata(question.name().clone(), 60, RData::A(A(address)));

    let mut response = Message::new(id, MessageType::Response, OpCode::Query);
    response.add_query(question);
    response.add_answer(answer);
    response.to_vec().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::op::Query;
    use hickory_proto::rr::{Name, RecordType};
    use std::str::FromStr;

    #[tokio::test]
    async fn test_mock_server_starts() {
        let result = MockDnsServer::start(MockBehavior::Answer(Ipv4Addr::new(1, 2, 3, 4))).await;
        assert!(result.is_ok());

        let (server, addr) = result.unwrap();
        assert!(addr.port() != 0);

        server.shutdown();
    }

    #[tokio::test]
    async fn test_mock_server_echoes_transaction_id() {
        let (server, addr) = MockDnsServer::start(MockBehavior::Answer(Ipv4Addr::new(1, 2, 3, 4)))
            .await
            .unwrap();

        let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

        let query = {
            let mut query = Query::new();
            query.set_name(Name::from_str("example.com").unwrap());
            query.set_query_type(RecordType::A);
            let mut message = Message::new(0x1234, MessageType::Query, OpCode::Query);
            message.add_query(query);
            message.to_vec().unwrap()
        };

        client.send_to(&query, addr).await.unwrap();

        let mut buf = vec![0u8; 512];
        let (len, _) = client.recv_from(&mut buf).await.unwrap();

        assert!(len > 12, "Response should have at least a header");
        assert_eq!(buf[0..2], query[0..2], "Transaction ID should match");
        assert_eq!(buf[2] & 0x80, 0x80, "QR bit should be set (response)");

        server.shutdown();
    }
}
