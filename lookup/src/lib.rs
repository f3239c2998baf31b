//! PIN code to state/city resolution.
//!
//! One remote attempt against the postal pincode service, degrading to a
//! small fixed local table on any failure. The public boundary is
//! [`lookup`], which returns `Option<Location>` and never propagates an
//! error: a failed lookup simply leaves the caller's derived fields empty,
//! and their required-validation surfaces that as a normal field error.

mod fallback;
mod http;
mod types;

pub use types::{Location, LookupConfig};

/// Resolve a 6-digit PIN code to a state/city pair.
///
/// Anything other than exactly six ASCII digits short-circuits to `None`
/// without touching the network. Otherwise one GET is issued against the
/// configured endpoint; on any failure (network error, non-success HTTP
/// status, malformed body, unresolved PIN) the local table is consulted.
pub async fn lookup(pin: &str, config: &LookupConfig) -> Option<Location> {
    if !is_pin(pin) {
        return None;
    }

    match http::remote(pin, config).await {
        Ok(location) => Some(location),
        Err(err) => {
            tracing::debug!(pin, error = %err, "remote lookup failed, trying local table");
            fallback::local(pin)
        }
    }
}

fn is_pin(value: &str) -> bool {
    value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::is_pin;

    #[test]
    fn pin_shape() {
        assert!(is_pin("560001"));
        assert!(!is_pin("56001"));
        assert!(!is_pin("5600011"));
        assert!(!is_pin("56000a"));
        assert!(!is_pin(""));
    }
}
