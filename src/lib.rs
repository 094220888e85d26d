//! Client library for the Firebase Cloud Messaging legacy HTTP API.
//!
//! This library provides a thin client around the fixed FCM send
//! endpoint: it serializes a [`Message`] to the legacy wire schema,
//! posts it with a server-key `Authorization` header, and decodes the
//! reply into a typed [`Response`].
//!
//! It handles:
//! - Server key validation and client construction
//! - Message and payload modeling with the exact wire schema
//! - Single-shot delivery with typed per-recipient results
//! - Error classification for every failure path
//!
//! It deliberately does not queue, batch or retry; one call is one
//! HTTP exchange, and delivery policy stays with the caller.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;

pub use client::{FcmClient, ENDPOINT};
pub use config::FcmConfig;
pub use errors::FcmError;
pub use models::{Message, Payload, Response, SendResult};
