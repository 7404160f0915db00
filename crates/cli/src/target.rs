//! Target URL resolution against the configured base URL.

use url::Url;

use crate::error::{PcError, Result};

/// Resolve an optional positional URL against the base URL.
///
/// Absolute URLs pass through unchanged; anything else is joined onto the
/// base, so `pagecheck navigate /settings` hits the app under verification.
/// An omitted URL targets the base itself.
pub fn resolve_url(positional: Option<&str>, base_url: &str) -> Result<String> {
    let base = Url::parse(base_url).map_err(|e| PcError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    match positional {
        None => Ok(base.to_string()),
        Some(raw) => {
            if let Ok(absolute) = Url::parse(raw) {
                return Ok(absolute.to_string());
            }
            base.join(raw)
                .map(|joined| joined.to_string())
                .map_err(|e| PcError::InvalidUrl {
                    url: raw.to_string(),
                    reason: e.to_string(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_url_targets_the_base() {
        let url = resolve_url(None, "http://localhost:3000").unwrap();
        assert_eq!(url, "http://localhost:3000/");
    }

    #[test]
    fn absolute_url_passes_through() {
        let url = resolve_url(Some("https://example.com/login"), "http://localhost:3000").unwrap();
        assert_eq!(url, "https://example.com/login");
    }

    #[test]
    fn path_joins_onto_the_base() {
        let url = resolve_url(Some("/settings"), "http://localhost:3000").unwrap();
        assert_eq!(url, "http://localhost:3000/settings");
    }

    #[test]
    fn data_url_passes_through() {
        let url = resolve_url(Some("data:text/html,<h1>Hi</h1>"), "http://localhost:3000").unwrap();
        assert!(url.starts_with("data:text/html,"));
    }

    #[test]
    fn invalid_base_is_an_error() {
        let err = resolve_url(None, "not a url").unwrap_err();
        assert!(err.to_string().contains("not a url"));
    }
}
