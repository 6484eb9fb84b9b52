/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, warn};

/// Reads `key` from the environment, keeping `fallback` when the variable is
/// unset or does not parse as `T`
pub fn env_or<T>(key: &str, fallback: T) -> T
where
    T: FromStr + Display,
{
    let Ok(raw) = env::var(key) else {
        return fallback;
    };
    match raw.parse::<T>() {
        Ok(value) => {
            debug!("{} overridden from environment: {}", key, value);
            value
        }
        Err(_) => {
            warn!("Ignoring {}={:?}, keeping {}", key, raw, fallback);
            fallback
        }
    }
}
