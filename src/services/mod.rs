//! # Store Services
//!
//! - **Match store** (`match_store`) - Reads and writes of the `match` table

pub mod match_store;
