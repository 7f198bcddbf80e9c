//! Application configuration loaded from environment variables.
//!
//! An optional `COINWATCH_API_URL` overrides the default public market
//! data endpoint. `COINWATCH_LOG` (read in `main`) names a file that
//! receives tracing output; without it, logging is disabled since the
//! terminal itself is owned by the TUI.

/// Default public market data endpoint.
const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub market: MarketApiConfig,
}

/// Market data API configuration values.
#[derive(Debug)]
pub struct MarketApiConfig {
    pub base_url: String,
}

/// Loads the application configuration from environment variables.
///
/// The API base URL defaults to the public CoinGecko v3 endpoint and can
/// be overridden with `COINWATCH_API_URL`. A trailing slash is trimmed so
/// endpoint paths join uniformly.
///
/// # Errors
///
/// Returns [`CoinwatchError::Config`](crate::CoinwatchError::Config) if
/// the override is not an http(s) URL.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url =
        non_empty_var("COINWATCH_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(crate::CoinwatchError::Config(format!(
            "COINWATCH_API_URL must be an http(s) URL, got {base_url}"
        )));
    }

    let base_url = base_url.trim_end_matches('/').to_string();

    Ok(AppConfig {
        market: MarketApiConfig { base_url },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper that temporarily sets env vars, runs `f`, then restores originals.
    ///
    /// # Safety
    ///
    /// Tests using this helper must run with `--test-threads=1` or otherwise
    /// ensure no other threads read these env vars concurrently.
    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(k, _)| (*k, std::env::var(k).ok()))
            .collect();

        for (k, v) in vars {
            // SAFETY: config tests run single-threaded (see test runner config).
            unsafe {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        for (k, original) in originals {
            // SAFETY: restoring original values, same single-threaded context.
            unsafe {
                match original {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn defaults_without_env_vars() {
        with_env(&[("COINWATCH_API_URL", None)], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.market.base_url, DEFAULT_API_URL);
        });
    }

    #[test]
    fn custom_api_url() {
        with_env(
            &[("COINWATCH_API_URL", Some("http://localhost:9000"))],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.market.base_url, "http://localhost:9000");
            },
        );
    }

    #[test]
    fn trailing_slash_trimmed() {
        with_env(
            &[("COINWATCH_API_URL", Some("https://api.example.com/v3/"))],
            || {
                let config = fetch_config().unwrap();
                assert_eq!(config.market.base_url, "https://api.example.com/v3");
            },
        );
    }

    #[test]
    fn rejects_non_http_url() {
        with_env(
            &[("COINWATCH_API_URL", Some("ftp://api.example.com"))],
            || {
                let err = fetch_config().unwrap_err();
                assert!(err.to_string().contains("http(s)"));
            },
        );
    }

    #[test]
    fn empty_value_treated_as_absent() {
        with_env(&[("COINWATCH_API_URL", Some(""))], || {
            let config = fetch_config().unwrap();
            assert_eq!(config.market.base_url, DEFAULT_API_URL);
        });
    }
}
