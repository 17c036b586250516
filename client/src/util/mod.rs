//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Everything except `browser` is pure and tested natively.

pub mod browser;
pub mod chart;
pub mod dom_ids;
pub mod highlight;
pub mod i18n;
