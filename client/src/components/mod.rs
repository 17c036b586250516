//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the upload flow and result widgets while reading/writing
//! shared state from Leptos context providers. Transition logic stays in
//! `state`; components only forward events and run the reported side effects.

pub mod chat_widget;
pub mod docs_modal;
pub mod input_tabs;
pub mod loader_overlay;
pub mod precheck_modal;
pub mod risk_list;
pub mod severity_chart;
pub mod summary_tools;
pub mod upload_box;
