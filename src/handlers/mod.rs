//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Liveness probe, independent of the store
//! - **Matches** (`matches`) - List, get, create, update and delete match records

mod health_check;
mod matches;

pub use health_check::*;
pub use matches::*;
