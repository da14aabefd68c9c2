//! Presenter implementations

pub mod console;
