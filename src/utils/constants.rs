//! Shared constants and invariants

use std::time::Duration;

/// Deadline applied to every outbound request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Validity-period hint sent with the token request: 7 days, in seconds.
/// The server's 401 is the only invalidation signal we act on.
pub const TOKEN_VALIDITY_SECONDS: u64 = 604_800;

/// Fixed result-page size for the search call.
pub const PAGE_SIZE: u32 = 100;

/// NAF codes covered by the search: restaurants (56.10A), cafes and
/// bar-tobacco shops (56.10B), beverage-serving pubs (56.30Z).
pub const NAF_CODES: [&str; 3] = ["56.10A", "56.10B", "56.30Z"];

/// Calendar-date format used by the API for both requests and records.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Search path prefix; the target SIREN is appended as the last segment.
pub const SEARCH_PATH: &str = "api-sirene/3.11/siren";

/// SIREN the upstream service historically queried.
pub const DEFAULT_SIREN: &str = "123456789";
