//! Vehicle Lookup API Library
//!
//! Proxies vehicle registration (RC) lookups to an upstream API, strips
//! internal `credit`/`cached` fields from the response and returns a
//! normalized JSON envelope.
//!
//! # Modules
//!
//! - `api`: Router assembly and handler namespace.
//! - `core`: Domain-layer namespace (cleaner, models, services, errors).
//! - `cleaner`: Deep clean of upstream payloads and result selection.
//! - `config`: Configuration management and process-wide constants.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Request and response envelopes.
//! - `services`: Upstream vehicle API client.

pub mod api;
pub mod core;

pub mod cleaner;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
