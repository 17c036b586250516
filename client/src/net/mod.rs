//! Networking modules for the backend HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side requests and `types` defines the shared
//! wire schema. Both stay free of Leptos signals so state modules can consume
//! their results directly.

pub mod api;
pub mod types;
