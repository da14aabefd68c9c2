//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod catalog_source;
pub mod catalog_store;
pub mod chart_sink;
pub mod drawing_surface;
pub mod presenter;
