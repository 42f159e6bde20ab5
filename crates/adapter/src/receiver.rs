//! Non-blocking UDP receiver for OSC control messages.
//!
//! The render loop calls [`OscReceiver::poll`] once per frame. Each call reads
//! at most one datagram and never blocks; anything that fails to decode is
//! dropped with a debug log line.

use std::io;
use std::net::{SocketAddr, UdpSocket};

use thiserror::Error;

use crate::osc::decode_message;
use crate::types::{Record, DEFAULT_OSC_PORT, RECV_BUFFER_SIZE};

#[derive(Debug, Error)]
pub enum ReceiverError {
    #[error("failed to bind UDP socket on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to set socket non-blocking")]
    NonBlocking(#[source] io::Error),
}

/// Receiver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_OSC_PORT,
        }
    }
}

impl ReceiverConfig {
    /// Create from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();
        let host = env::var("OSC_WIREFRAME_HOST")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.host);
        let port = env::var("OSC_WIREFRAME_PORT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.port);

        Self { host, port }
    }

    /// Check if the receiver is disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("OSC_WIREFRAME_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub struct OscReceiver {
    socket: UdpSocket,
    local_addr: SocketAddr,
    recv_buf: Vec<u8>,
}

impl OscReceiver {
    pub fn bind(config: &ReceiverConfig) -> Result<Self, ReceiverError> {
        let addr = config.bind_addr();
        let socket = UdpSocket::bind((config.host.as_str(), config.port)).map_err(|source| {
            ReceiverError::Bind {
                addr: addr.clone(),
                source,
            }
        })?;
        socket
            .set_nonblocking(true)
            .map_err(ReceiverError::NonBlocking)?;
        let local_addr = socket
            .local_addr()
            .map_err(|source| ReceiverError::Bind { addr, source })?;

        tracing::info!(%local_addr, "OSC receiver bound");

        Ok(Self {
            socket,
            local_addr,
            recv_buf: vec![0u8; RECV_BUFFER_SIZE],
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Read and decode at most one pending datagram.
    ///
    /// Returns `None` when nothing is queued, on receive errors, and for
    /// datagrams that fail to decode.
    pub fn poll(&mut self) -> Option<Record> {
        match self.socket.recv_from(&mut self.recv_buf) {
            Ok((len, from)) => match decode_message(&self.recv_buf[..len]) {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::debug!(%error, %from, len, "dropping malformed datagram");
                    None
                }
            },
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => None,
            Err(error) => {
                tracing::warn!(%error, "UDP receive failed");
                None
            }
        }
    }
}

impl std::fmt::Debug for OscReceiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OscReceiver")
            .field("local_addr", &self.local_addr)
            .finish()
    }
}
