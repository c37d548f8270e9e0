//! UDP listener standing in for the Datadog agent.

use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::timeout;

pub struct StatsdAgent {
    socket: UdpSocket,
    pub address: String,
}

impl StatsdAgent {
    pub async fn bind() -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let address = socket.local_addr().unwrap().to_string();
        Self { socket, address }
    }

    /// Lines of the next datagram, or `None` if nothing arrives in time.
    pub async fn recv_lines(&self, wait: Duration) -> Option<Vec<String>> {
        let mut buf = vec![0u8; 65_536];
        let len = timeout(wait, self.socket.recv(&mut buf)).await.ok()?.ok()?;
        let text = String::from_utf8_lossy(&buf[..len]).into_owned();
        Some(text.lines().map(ToOwned::to_owned).collect())
    }
}
