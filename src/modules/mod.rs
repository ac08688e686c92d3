//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the document store and the local upload storage.

pub mod document_store;
pub mod uploads;
