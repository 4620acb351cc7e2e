//! Teams-Webhook: Microsoft Teams notification client
//!
//! A library for posting [`MessageCard`] payloads to Microsoft Teams
//! incoming-webhook URLs, with input validation and a typed error
//! taxonomy for the webhook service's response statuses.

pub mod card;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod validate;

mod trace;

#[cfg(test)]
mod client_tests;

pub use card::{Fact, MessageCard, Section};
pub use client::{Client, Options};
pub use error::{HttpError, SendError, ValidationError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use transport::ReqwestTransport;
