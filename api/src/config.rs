use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::app::{LoadingPolicy, DEFAULT_MIN_BATTERY_CAPACITY_FOR_LOADING, MIN_BATTERY_CAPACITY_RANGE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Log every SQL statement
    pub database_debug: bool,
    pub port: u16,
    /// Minimum battery percentage a drone needs before it can be loaded
    pub min_battery_capacity_for_loading: f64,
    pub battery_gating_enabled: bool,
    /// How often drone battery levels are logged; zero disables the audit
    pub battery_audit_interval: Duration,
    /// Seed a demo fleet into an empty database on startup
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let min_battery_capacity_for_loading = parse_or(
            &lookup,
            "MIN_BATTERY_CAPACITY_FOR_LOADING",
            DEFAULT_MIN_BATTERY_CAPACITY_FOR_LOADING,
        )?;
        if !MIN_BATTERY_CAPACITY_RANGE.contains(&min_battery_capacity_for_loading) {
            return Err(ConfigError::Invalid {
                var: "MIN_BATTERY_CAPACITY_FOR_LOADING",
                value: min_battery_capacity_for_loading.to_string(),
                reason: format!(
                    "must be between {} and {}",
                    MIN_BATTERY_CAPACITY_RANGE.start(),
                    MIN_BATTERY_CAPACITY_RANGE.end()
                ),
            });
        }

        Ok(Self {
            database_url,
            database_debug: parse_or(&lookup, "DATABASE_DEBUG", false)?,
            port: parse_or(&lookup, "PORT", 8080)?,
            min_battery_capacity_for_loading,
            battery_gating_enabled: parse_or(&lookup, "BATTERY_GATING_ENABLED", true)?,
            battery_audit_interval: Duration::from_secs(parse_or(
                &lookup,
                "BATTERY_AUDIT_INTERVAL_SECS",
                60,
            )?),
            seed: parse_or(&lookup, "SEED", false)?,
        })
    }

    /// Battery gating policy for the drone service
    pub fn loading_policy(&self) -> LoadingPolicy {
        if self.battery_gating_enabled {
            LoadingPolicy::gated(self.min_battery_capacity_for_loading)
        } else {
            LoadingPolicy::ungated()
        }
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: value.clone(),
            reason: e.to_string(),
        }),
    }
}
