//! Endpoint Connection
//!
//! Handles the TCP connection to the configuration endpoint.

use std::io;
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{DiscoveryDriver, DiscoveryResponse};

/// A connection to the cluster configuration endpoint
///
/// The socket is shut down and closed when the connection is dropped, so
/// every exit path out of a discovery attempt releases it.
pub struct Connection {
    /// Discovery driver over the TCP stream
    driver: DiscoveryDriver<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Open a connection to the configured endpoint
    ///
    /// Sets up the socket and applies the configured timeouts
    pub fn open(config: &Config) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let stream = connect(endpoint, config)?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| endpoint.to_string());

        // Small request/response exchange; don't wait on Nagle
        stream.set_nodelay(true)?;
        stream.set_read_timeout(config.read_timeout())?;
        stream.set_write_timeout(config.write_timeout())?;

        tracing::debug!("Connected to configuration endpoint {}", peer_addr);

        Ok(Self {
            driver: DiscoveryDriver::new(stream),
            peer_addr,
        })
    }

    /// Run the discovery exchange on this connection
    pub fn discover(&mut self) -> Result<DiscoveryResponse> {
        self.driver.discover()
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // The peer may already be gone; closing is best effort
        let _ = self.driver.get_ref().shutdown(Shutdown::Both);
        tracing::debug!("Closed connection to {}", self.peer_addr);
    }
}

fn connect(endpoint: &str, config: &Config) -> io::Result<TcpStream> {
    let Some(timeout) = config.connect_timeout() else {
        return TcpStream::connect(endpoint);
    };

    let mut last_err = None;
    for addr in endpoint.to_socket_addrs()? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                tracing::debug!("Connect to {} failed: {}", addr, e);
                last_err = Some(e);
            }
        }
    }

    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("endpoint {} resolved to no addresses", endpoint),
        )
    }))
}
