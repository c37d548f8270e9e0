//! DogStatsD sink backed by a buffered `cadence` client.

use std::borrow::Cow;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};

use async_trait::async_trait;
use cadence::prelude::*;
use cadence::{BufferedUdpMetricSink, ErrorKind, MetricError, StatsdClient};
use tokio::net::lookup_host;
use tracing::{debug, info};

use super::settings::DEFAULT_MAX_PACKET_SIZE;
use super::NAMESPACE;
use crate::domain::Gauge;
use crate::error::PublishError;
use crate::port::outbound::gauge::GaugeSink;

/// Sends gauges to one DogStatsD agent.
///
/// Gauges are buffered into datagrams of at most the configured packet size
/// and flushed at the end of every batch.
pub struct DogStatsdClient {
    client: StatsdClient,
    target: SocketAddr,
}

impl DogStatsdClient {
    /// Connect with the default packet size.
    ///
    /// # Errors
    ///
    /// See [`DogStatsdClient::connect_with_capacity`].
    pub async fn connect(address: &str) -> Result<Self, MetricError> {
        Self::connect_with_capacity(address, DEFAULT_MAX_PACKET_SIZE).await
    }

    /// Resolve `address` (`host:port`) and build a buffered client for it.
    ///
    /// # Errors
    ///
    /// Fails when the address does not resolve or the socket cannot be bound.
    pub async fn connect_with_capacity(
        address: &str,
        max_packet_size: usize,
    ) -> Result<Self, MetricError> {
        let target = lookup_host(address).await?.next().ok_or_else(|| {
            MetricError::from((ErrorKind::InvalidInput, "no address found for statsd host"))
        })?;

        let local: SocketAddr = if target.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local)?;
        socket.set_nonblocking(true)?;

        let sink = BufferedUdpMetricSink::with_capacity(target, socket, max_packet_size)?;
        let client = StatsdClient::builder(NAMESPACE, sink).build();

        info!(%target, max_packet_size, "Connected statsd client");

        Ok(Self { client, target })
    }

    #[must_use]
    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

/// Make a tag value safe to embed in a DogStatsD line.
///
/// Line breaks and `|` would end the tag section, so they are dropped; `,`
/// would start a new tag, so it becomes `_`.
#[must_use]
pub fn sanitize_tag_value(value: &str) -> Cow<'_, str> {
    if !value.contains(['\n', '\r', '|', ',']) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '|'))
            .map(|c| if c == ',' { '_' } else { c })
            .collect(),
    )
}

#[async_trait]
impl GaugeSink for DogStatsdClient {
    async fn submit(&self, gauges: &[Gauge]) -> Result<(), PublishError> {
        if gauges.is_empty() {
            return Ok(());
        }

        for gauge in gauges {
            let values: Vec<Cow<'_, str>> = gauge
                .tags
                .iter()
                .map(|t| sanitize_tag_value(&t.value))
                .collect();

            let mut builder = self.client.gauge_with_tags(gauge.name, gauge.value);
            for (tag, value) in gauge.tags.iter().zip(&values) {
                builder = builder.with_tag(tag.key, value);
            }
            builder.try_send().map_err(PublishError::Send)?;
        }

        self.client.flush().map_err(PublishError::Send)?;

        debug!(gauges = gauges.len(), agent = %self.target, "Sent gauges to statsd");
        Ok(())
    }
}
