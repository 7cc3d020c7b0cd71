//! Bot configuration structures and loaders.
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use pursuit_core::PlannerConfig;

/// Failure while assembling a [`BotConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error(transparent)]
    Planner(#[from] pursuit_core::ConfigError),
}

/// Everything the `pursuit` binary needs besides the input stream.
#[derive(Clone, Debug, PartialEq)]
pub struct BotConfig {
    pub planner: PlannerConfig,
    /// Wall-clock budget per turn; exceeding it only logs a warning.
    pub turn_budget: Duration,
    /// Directory for a plain log file next to the stderr output.
    pub log_dir: Option<PathBuf>,
}

impl BotConfig {
    pub const DEFAULT_TURN_BUDGET_MS: u64 = 50;

    pub fn new(planner: PlannerConfig) -> Self {
        Self {
            planner,
            turn_budget: Duration::from_millis(Self::DEFAULT_TURN_BUDGET_MS),
            log_dir: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PURSUIT_CONFIG` - RON file holding a `PlannerConfig` (optional)
    /// - `PURSUIT_DISTANCE_DISCOUNT` - Desirability lost per step (default: 0.5)
    /// - `PURSUIT_RETARGET_MARGIN` - Improvement needed to switch target (default: 2.0)
    /// - `PURSUIT_STEP_COST` - Score added per step of travel (default: -1)
    /// - `PURSUIT_TURN_BUDGET_MS` - Turn deadline for warnings (default: 50)
    /// - `PURSUIT_LOG_DIR` - Directory for `pursuit.log` (default: stderr only)
    ///
    /// Individual variables override values from the file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`BotConfig::from_env`] with an explicit variable source.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let planner = match lookup("PURSUIT_CONFIG") {
            Some(path) => load_planner(Path::new(&path))?,
            None => PlannerConfig::default(),
        };
        let mut config = Self::new(planner);

        if let Some(discount) = read_var::<f64, _>(&lookup, "PURSUIT_DISTANCE_DISCOUNT") {
            config.planner.distance_discount = discount;
        }
        if let Some(margin) = read_var::<f64, _>(&lookup, "PURSUIT_RETARGET_MARGIN") {
            config.planner.retarget_margin = margin;
        }
        if let Some(step_cost) = read_var::<i32, _>(&lookup, "PURSUIT_STEP_COST") {
            config.planner.step_cost = step_cost;
        }
        if let Some(millis) = read_var::<u64, _>(&lookup, "PURSUIT_TURN_BUDGET_MS") {
            config.turn_budget = Duration::from_millis(millis.max(1));
        }
        config.log_dir = lookup("PURSUIT_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config.planner.validate()?;
        Ok(config)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// Loads a `PlannerConfig` from a RON file. Missing fields take their defaults.
pub fn load_planner(path: &Path) -> Result<PlannerConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let planner: PlannerConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(planner)
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn ron_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_variables() {
        let config = BotConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, BotConfig::default());
        assert_eq!(config.turn_budget, Duration::from_millis(50));
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn loads_planner_from_ron_file() {
        let file = ron_file("(distance_discount: 1.5, retarget_margin: 0.0, step_cost: -2)");
        let path = file.path().to_string_lossy().into_owned();

        let config = BotConfig::from_vars(vars(&[("PURSUIT_CONFIG", path.as_str())])).unwrap();

        assert_eq!(config.planner.distance_discount, 1.5);
        assert_eq!(config.planner.retarget_margin, 0.0);
        assert_eq!(config.planner.step_cost, -2);
    }

    #[test]
    fn partial_ron_file_keeps_defaults() {
        let file = ron_file("(retarget_margin: 4.0)");
        let planner = load_planner(file.path()).unwrap();

        assert_eq!(planner.retarget_margin, 4.0);
        assert_eq!(
            planner.distance_discount,
            PlannerConfig::DEFAULT_DISTANCE_DISCOUNT
        );
    }

    #[test]
    fn variables_override_file() {
        let file = ron_file("(distance_discount: 1.5, retarget_margin: 3.0)");
        let path = file.path().to_string_lossy().into_owned();

        let config = BotConfig::from_vars(vars(&[
            ("PURSUIT_CONFIG", path.as_str()),
            ("PURSUIT_DISTANCE_DISCOUNT", "0.25"),
            ("PURSUIT_TURN_BUDGET_MS", "80"),
            ("PURSUIT_LOG_DIR", "/tmp/pursuit"),
        ]))
        .unwrap();

        assert_eq!(config.planner.distance_discount, 0.25);
        assert_eq!(config.planner.retarget_margin, 3.0);
        assert_eq!(config.turn_budget, Duration::from_millis(80));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/pursuit")));
    }

    #[test]
    fn unparsable_variable_is_ignored() {
        let config = BotConfig::from_vars(vars(&[("PURSUIT_STEP_COST", "cheap")])).unwrap();
        assert_eq!(config.planner.step_cost, PlannerConfig::DEFAULT_STEP_COST);
    }

    #[test]
    fn negative_discount_is_rejected() {
        let result = BotConfig::from_vars(vars(&[("PURSUIT_DISTANCE_DISCOUNT", "-1")]));
        assert!(matches!(
            result,
            Err(ConfigError::Planner(
                pursuit_core::ConfigError::InvalidDistanceDiscount(_)
            ))
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = load_planner(Path::new("/nonexistent/pursuit.ron"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_file_is_reported() {
        let file = ron_file("(distance_discount: \"far\")");
        assert!(matches!(
            load_planner(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
