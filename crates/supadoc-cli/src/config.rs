use std::env;

use supadoc_core::{Error, Result};

/// Connection parameters for the introspected project.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub key: String,
}

impl Config {
    /// Read the required parameters from the environment.
    ///
    /// Fails fast when either is missing or empty; no defaults, no retry.
    pub fn from_env() -> Result<Self> {
        let url = required("SUPABASE_URL")?;
        let key = required("SUPABASE_ANON_KEY")?;
        Ok(Self { url, key })
    }
}

fn required(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!(
            "please ensure {name} is set in your environment or .env file"
        ))),
    }
}
