#![doc = include_str!("../README.md")]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[macro_use]
extern crate log;

pub mod client;
mod error;
pub mod http;
pub mod models;
mod server;

pub use client::{Client, ClientOptions};
pub use error::{EntityKind, Error, Result};
pub use http::query::{Page, Range, Sort};
pub use server::{Server, StatusEnvironment};

pub mod prelude {
    pub use super::client::{Client, ClientOptions};
    pub use super::http::query::{Page, Range, Sort};
    pub use super::server::{Server, StatusEnvironment};
}
