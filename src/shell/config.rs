// Runtime configuration read from the environment (and `.env` via dotenvy in main).

use crate::modules::shifts::core::break_policy::BreakPolicy;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub break_policy: BreakPolicy,
    pub audit_required: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = BreakPolicy::default();
        let policy = BreakPolicy {
            long_threshold_hours: read_hours(&lookup, "BREAK_LONG_THRESHOLD_HOURS", defaults.long_threshold_hours)?,
            long_break_minutes: read(&lookup, "BREAK_LONG_MINUTES", defaults.long_break_minutes)?,
            short_threshold_hours: read_hours(&lookup, "BREAK_SHORT_THRESHOLD_HOURS", defaults.short_threshold_hours)?,
            short_break_minutes: read(&lookup, "BREAK_SHORT_MINUTES", defaults.short_break_minutes)?,
        };
        if policy.short_threshold_hours > policy.long_threshold_hours {
            return Err(ConfigError::Invalid {
                name: "BREAK_SHORT_THRESHOLD_HOURS",
                value: policy.short_threshold_hours.to_string(),
            });
        }

        Ok(Self {
            addr: read(&lookup, "DRIVER_HOURS_ADDR", DEFAULT_ADDR)?,
            break_policy: policy,
            audit_required: read(&lookup, "AUDIT_REQUIRED", false)?,
        })
    }
}

fn invalid(name: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
    }
}

fn read<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| invalid(name, &raw)),
    }
}

fn read_hours(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: f64,
) -> Result<f64, ConfigError> {
    let hours: f64 = read(lookup, name, default)?;
    if !hours.is_finite() || hours < 0.0 {
        return Err(invalid(name, &hours.to_string()));
    }
    Ok(hours)
}
