use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::similarity::aggregate::AggregatorKind;
use crate::translate::google::DEFAULT_TRANSLATE_URL;
use crate::translate::rate_limiter::interval_for;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is a valid configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the results tree (translations/, similarities/, graphs).
    pub results_dir: PathBuf,
    /// Base URL of the translation service.
    pub translate_url: String,
    /// Maximum translation requests per second (0 disables pacing).
    pub translate_qps: f64,
    /// Per-word timeout; a timed-out word keeps its original form.
    pub translate_timeout: Duration,
    /// How pairwise matrices are reduced to one score.
    pub aggregator: AggregatorKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("./results"),
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            translate_qps: 5.0,
            translate_timeout: Duration::from_secs(10),
            aggregator: AggregatorKind::Diagonal,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let translate_qps = match env::var("LEXIGRAPH_TRANSLATE_QPS") {
            Ok(v) => parse_qps(&v)?,
            Err(_) => defaults.translate_qps,
        };

        let translate_timeout = match env::var("LEXIGRAPH_TRANSLATE_TIMEOUT_SECS") {
            Ok(v) => Duration::from_secs(v.parse().with_context(|| {
                format!("LEXIGRAPH_TRANSLATE_TIMEOUT_SECS is not a whole number: {v}")
            })?),
            Err(_) => defaults.translate_timeout,
        };

        let aggregator = match env::var("LEXIGRAPH_AGGREGATOR") {
            Ok(v) => v.parse()?,
            Err(_) => defaults.aggregator,
        };

        Ok(Self {
            results_dir: env::var("LEXIGRAPH_RESULTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.results_dir),
            translate_url: env::var("TRANSLATE_API_URL").unwrap_or(defaults.translate_url),
            translate_qps,
            translate_timeout,
            aggregator,
        })
    }
}

/// Parse LEXIGRAPH_TRANSLATE_QPS, rejecting rates the limiter can't pace.
fn parse_qps(value: &str) -> Result<f64> {
    let qps: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("LEXIGRAPH_TRANSLATE_QPS is not a number: {value}"))?;
    interval_for(qps).with_context(|| format!("LEXIGRAPH_TRANSLATE_QPS={value} is out of range"))?;
    Ok(qps)
}
