//! Root route returning the static greeting.

use crate::config::GREETING;

/// Greeting handler for `GET /`.
///
/// Stateless and idempotent: every request receives the identical body with
/// the framework default `text/plain; charset=utf-8` content type.
pub async fn index() -> &'static str {
    GREETING
}
