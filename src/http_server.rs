//! This module provides an [`HttpServer`] that serves an [`axum Router`](Router) over HTTP/1 connections.

use std::net::{
    SocketAddr,
    ToSocketAddrs,
};

use axum::Router;
use hyper::server::conn::Http;
use tokio::{
    net::{
        TcpListener,
        TcpStream,
    },
    spawn,
    task::JoinHandle,
};
use tracing::{
    error,
    info,
    trace,
    warn,
};

use crate::ServerError;

/// The name used in log messages when none was given to [`HttpServer::bind`].
const DEFAULT_NAME: &str = "HttpServer";

/// An HttpServer owning its accept loop, so it can be started on any address and stopped again. \
/// Each accepted connection is driven by hyper's HTTP/1 connection handler; routing, extraction and
/// serialization are left to the [`Router`] it serves. Malformed requests are answered by hyper with
/// `400 Bad Request`.
///
/// # How to use this HttpServer
///
/// ```ignore
/// let mut http_server = HttpServer::bind("0.0.0.0:8080", Some("paramecho"))?;
/// let addr = http_server.serve(paramecho::routes::router()).await?;
///
/// // ...
///
/// http_server.shutdown().await;
/// ```
pub struct HttpServer {
    /// The address the listener will bind to.
    addr: SocketAddr,
    /// The address the listener is actually bound to, once serving.
    local_addr: Option<SocketAddr>,
    /// The accept loop of this HttpServer.
    main_task: Option<JoinHandle<()>>,
    /// The name of this HttpServer, which gets used in log messages.
    name: String,
}
impl HttpServer {
    /// Resolve the address for a new HttpServer. Nothing is bound until [`serve`](Self::serve) is called.
    ///
    /// If no name is given, `"HttpServer"` is used.
    ///
    /// # Errors
    ///
    /// An error is returned if the address cannot be resolved to at least one [`SocketAddr`].
    pub fn bind<A: ToSocketAddrs>(addr: A, name: Option<&str>) -> Result<Self, ServerError> {
        let addr = addr
            .to_socket_addrs()
            .map_err(ServerError::Resolve)?
            .next()
            .ok_or(ServerError::NoAddress)?;

        Ok(Self {
            addr,
            local_addr: None,
            main_task: None,
            name: name.unwrap_or(DEFAULT_NAME).to_string(),
        })
    }
    /// The name of this HttpServer.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// The address the listener is bound to, or `None` if this HttpServer is not serving.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }
    /// Whether the accept loop of this HttpServer is alive.
    pub fn is_running(&self) -> bool {
        self.main_task
            .as_ref()
            .is_some_and(|main_task| !main_task.is_finished())
    }
    /// Stop accepting connections by aborting the accept loop. \
    /// If this HttpServer was already offline, this method will do nothing.
    pub async fn shutdown(&mut self) {
        if let Some(main_task) = self.main_task.take() {
            main_task.abort();
            self.local_addr = None;

            info!(server = %self.name, "Stopped.");
        }
    }

    /// Serve the given [`Router`] and return the address the listener is bound to. \
    /// This function returns as soon as the listener is bound; connections are handled in the background.
    ///
    /// # Errors
    ///
    /// An error is returned if this HttpServer is already serving or if the listener could not be bound.
    pub async fn serve(&mut self, router: Router) -> Result<SocketAddr, ServerError> {
        if self.is_running() {
            return Err(ServerError::AlreadyRunning);
        }

        info!(server = %self.name, addr = %self.addr, "Starting...");

        let tcp_listener = match TcpListener::bind(self.addr).await {
            Ok(listener) => listener,
            Err(source) => {
                error!(server = %self.name, error = %source, "An error occurred while binding the TcpListener.");
                return Err(ServerError::Bind {
                    addr: self.addr,
                    source,
                });
            }
        };
        let local_addr = tcp_listener.local_addr()?;

        info!(server = %self.name, addr = %local_addr, "Started! Now listening for clients...");

        let name = self.name.clone();
        let main_task = spawn(async move {
            loop {
                match tcp_listener.accept().await {
                    Ok((client, client_addr)) => {
                        trace!(server = %name, %client_addr, "A new client connected.");

                        let router = router.clone();
                        let name = name.clone();
                        spawn(async move {
                            if let Err(error) = Self::handler(client, router).await {
                                warn!(server = %name, %client_addr, %error, "The connection was dropped.");
                            }
                        });
                    }
                    Err(error) => {
                        error!(server = %name, %error, "Could not accept an incoming connection. It will be ignored.");
                    }
                }
            }
        });

        self.local_addr = Some(local_addr);
        self.main_task = Some(main_task);

        Ok(local_addr)
    }
    /// The handler of each client.
    async fn handler(client: TcpStream, router: Router) -> Result<(), ServerError> {
        Http::new()
            .http1_only(true)
            .serve_connection(client, router)
            .await?;

        Ok(())
    }
}
