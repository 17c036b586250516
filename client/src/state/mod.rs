//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`submission`, `chat`, `results`, `ui`) so
//! individual components can depend on small focused models. Each is a plain
//! struct wrapped in an `RwSignal` and provided through Leptos context.

pub mod chat;
pub mod results;
pub mod submission;
pub mod ui;
pub mod upload;
