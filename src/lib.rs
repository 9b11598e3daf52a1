#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::needless_doctest_main)]
#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used
)]

pub use axum;

mod error;
pub mod http_server;
#[doc(hidden)]
pub mod macros;
pub mod routes;

pub use error::ServerError;
pub use http_server::HttpServer;
