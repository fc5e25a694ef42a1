//! # Application Constants
//!
//! Defaults used when the corresponding environment variable is absent, and
//! fixed limits applied to the store connection pool.

use std::time::Duration;

/// HTTP listening port when `PORT` is not set
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Store port when `DB_PORT` is not set
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Pool size when `DB_MAX_CONNECTIONS` is not set
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Maximum time a request waits for a pooled connection
///
/// Past this, the query fails and the request is answered with a 500.
pub const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "matchday=info,tower_http=info";
