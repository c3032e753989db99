// ABOUTME: Environment configuration management for deployment-specific analytics settings
// ABOUTME: Parses deployment mode, default report window, and default response-time filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Clinicflow

//! Environment-based configuration

use clinicflow_analytics::ResponseTimeFilters;
use clinicflow_core::constants::env_config;
use clinicflow_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Live deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Analytics settings shared by the CLI and any embedding service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Trailing window used when a request does not name one
    pub window_days: u32,
    /// Filters used when a request does not name them
    pub default_filters: ResponseTimeFilters,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            window_days: env_config::DEFAULT_WINDOW_DAYS,
            default_filters: ResponseTimeFilters::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if a variable is set to an unusable value
    pub fn from_env() -> AppResult<Self> {
        let config = Self::from_lookup(|key| env::var(key).ok())?;
        info!(
            environment = %config.environment,
            window_days = config.window_days,
            "Analytics configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if a variable is set to an unusable value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();
        let environment = lookup(env_config::ENVIRONMENT)
            .map_or(defaults.environment, |value| {
                Environment::from_str_or_default(&value)
            });

        let window_days = match lookup(env_config::WINDOW_DAYS) {
            Some(value) => parse_window_days(&value)?,
            None => defaults.window_days,
        };

        let fallback = defaults.default_filters;
        let default_filters = ResponseTimeFilters {
            include_human: parse_flag(
                env_config::INCLUDE_HUMAN,
                lookup(env_config::INCLUDE_HUMAN),
                fallback.include_human,
            )?,
            include_assistant: parse_flag(
                env_config::INCLUDE_ASSISTANT,
                lookup(env_config::INCLUDE_ASSISTANT),
                fallback.include_assistant,
            )?,
            business_hours_only: parse_flag(
                env_config::BUSINESS_HOURS_ONLY,
                lookup(env_config::BUSINESS_HOURS_ONLY),
                fallback.business_hours_only,
            )?,
        };

        Ok(Self {
            environment,
            window_days,
            default_filters,
        })
    }
}

fn parse_window_days(value: &str) -> AppResult<u32> {
    match value.trim().parse::<u32>() {
        Ok(days) if (1..=env_config::MAX_WINDOW_DAYS).contains(&days) => Ok(days),
        _ => Err(AppError::config(format!(
            "{} must be a whole number of days from 1 to {}, got {value:?}",
            env_config::WINDOW_DAYS,
            env_config::MAX_WINDOW_DAYS
        ))),
    }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> AppResult<bool> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!(
            "{key} must be a boolean, got {value:?}"
        ))),
    }
}
