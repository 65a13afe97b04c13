use std::env;

use crate::log_warn;

const ENABLE_LOGS: bool = true;

const SEED_VAR: &str = "AIRTAMGU_SEED";
const LOOKBACK_VAR: &str = "AIRTAMGU_LOOKBACK_DAYS";

/// Tunables for dataset generation and the raw data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Rows per raw data page.
    pub page_size: usize,

    /// How many days back (including today) the synthetic dataset spans.
    pub lookback_days: u32,

    /// Fixed RNG seed. `None` seeds from OS entropy, so every launch differs.
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            lookback_days: 30,
            seed: None,
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `AIRTAMGU_SEED` and `AIRTAMGU_LOOKBACK_DAYS`.
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(err) => log_warn!("ignoring {SEED_VAR}={raw:?}: {err}"),
            }
        }

        if let Some(raw) = lookup(LOOKBACK_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(days) if days > 0 => config.lookback_days = days,
                Ok(_) => log_warn!("ignoring {LOOKBACK_VAR}=0"),
                Err(err) => log_warn!("ignoring {LOOKBACK_VAR}={raw:?}: {err}"),
            }
        }

        config
    }
}
