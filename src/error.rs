//! Errors raised by the [`HttpServer`](crate::HttpServer).

use std::{
    io,
    net::SocketAddr,
};

use thiserror::Error;

/// Everything that can go wrong while binding, serving, or answering a connection.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The given address could not be converted to a [`SocketAddr`].
    #[error("the address could not be resolved: {0}")]
    Resolve(#[source] io::Error),
    /// The given address resolved to an empty list.
    #[error("the address did not resolve to any socket address")]
    NoAddress,
    /// [`serve`](crate::HttpServer::serve) was called on a server that is still serving.
    #[error("the server is already serving")]
    AlreadyRunning,
    /// The listener could not be bound.
    #[error("could not bind the listener to `{addr}`: {source}")]
    Bind {
        /// The address the listener tried to bind to.
        addr: SocketAddr,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// A client connection failed while hyper was driving it.
    #[error("connection error: {0}")]
    Connection(#[from] hyper::Error),
    /// Reading the state of the listener failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
