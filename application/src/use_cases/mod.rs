//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod app_controller;
pub mod gacha;
pub mod pacer;
pub mod quiz_engine;
pub mod recommend;
pub mod render_chart;

#[cfg(test)]
pub(crate) mod test_support;
