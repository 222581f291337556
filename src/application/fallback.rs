//! Failure policy for every best-effort external dependency.
//!
//! Each policy names the dependency, bounds the call with an optional
//! timeout, and swaps in a fallback value when the call fails or times out.
//! The fallback values themselves live next to the callers:
//!
//! | policy          | timeout         | fallback                     |
//! |-----------------|-----------------|------------------------------|
//! | `market_data`   | config (10 s)   | synthetic flagged quote      |
//! | `news`          | none            | empty result for the term    |
//! | `symbol_search` | config (3 s)    | no match                     |
//! | `model_output`  | n/a (parse)     | empty entities               |
//!
//! Vector-store failures have no policy and propagate.

use crate::config::Config;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct FallbackPolicy {
    pub name: &'static str,
    pub timeout: Option<Duration>,
}

impl FallbackPolicy {
    pub const fn new(name: &'static str, timeout: Option<Duration>) -> Self {
        Self { name, timeout }
    }

    /// Await `call` within the timeout; on error or expiry use `fallback`.
    pub async fn run<T, E, F>(&self, call: F, fallback: impl FnOnce() -> T) -> T
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(_) => Err(format!("timed out after {}ms", limit.as_millis())),
            },
            None => call.await.map_err(|e| e.to_string()),
        };
        self.recover(outcome, fallback)
    }

    /// Resolve an already-computed result under this policy.
    pub fn recover<T, E: Display>(&self, result: Result<T, E>, fallback: impl FnOnce() -> T) -> T {
        match result {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(policy = self.name, error = %e, "external call failed, using fallback");
                fallback()
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FallbackPolicies {
    pub market_data: FallbackPolicy,
    pub news: FallbackPolicy,
    pub symbol_search: FallbackPolicy,
    pub model_output: FallbackPolicy,
}

impl FallbackPolicies {
    pub fn from_config(config: &Config) -> Self {
        Self {
            market_data: FallbackPolicy::new("market_data", Some(config.market_timeout)),
            news: FallbackPolicy::new("news", None),
            symbol_search: FallbackPolicy::new("symbol_search", Some(config.symbol_search_timeout)),
            model_output: FallbackPolicy::new("model_output", None),
        }
    }
}

impl Default for FallbackPolicies {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
