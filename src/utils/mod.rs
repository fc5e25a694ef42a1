//! # Utility Modules
//!
//! - **Constants** (`constant`) - Defaults and fixed limits
//! - **Telemetry** (`telemetry`) - Tracing subscriber setup

pub mod constant;
pub mod telemetry;
