//! YAML configuration for a detection run.
//!
//! One file describes the whole run: where the stop words and both corpora
//! come from, the canonicalization toggles, comparator thresholds and which
//! strategies to run. Values can be overridden from the environment with the
//! `DUPESCAN` prefix and `__` as the section separator, and from the CLI.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! stopwords: data/stopwords.txt
//!
//! left:
//!   name: cnnbrk
//!   timeline: data/cnnbrk.json
//!   inserts: data/insert1.txt
//!
//! right:
//!   name: nasa
//!   timeline: data/nasa.json
//!   inserts: data/insert2.txt
//!
//! canonical:
//!   version: 1
//!   strip_hashtags: true
//!   strip_mentions: true
//!   strip_urls: true
//!   lowercase: true
//!
//! matcher:
//!   word_threshold: 0.5
//!   cosine_threshold: 0.5
//!   fingerprint_trials: 10
//!   use_parallel: false
//!
//! strategies: [exact, word_overlap, fingerprint, cosine]
//! seed: 42
//! log_level: info
//! log_json: false
//! ```
//!
//! Environment example: `DUPESCAN__MATCHER__FINGERPRINT_TRIALS=25`,
//! `DUPESCAN__STRATEGIES=exact,cosine`.

use std::path::{Path, PathBuf};

use canonical::CanonicalizeConfig;
use config::{Config, Environment, File, FileFormat};
use matcher::{MatchConfig, Strategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const ENV_PREFIX: &str = "DUPESCAN";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("no comparison strategy selected")]
    NoStrategies,
}

/// Where one corpus comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CorpusSource {
    /// Display name used in logs and reports.
    #[serde(default)]
    pub name: Option<String>,

    /// Saved timeline (JSON array of `{id, text}`) for the fetched portion.
    #[serde(default)]
    pub timeline: Option<PathBuf>,

    /// Injected ground-truth messages, one per line.
    #[serde(default)]
    pub inserts: Option<PathBuf>,
}

impl CorpusSource {
    pub fn label<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}

/// Top-level configuration for a detection run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectConfig {
    /// Configuration format version
    pub version: String,

    /// Stop-word list, one word per line
    pub stopwords: PathBuf,

    #[serde(default)]
    pub left: CorpusSource,

    #[serde(default)]
    pub right: CorpusSource,

    #[serde(default)]
    pub canonical: CanonicalizeConfig,

    #[serde(default)]
    pub matcher: MatchConfig,

    /// Strategies to run, in order
    #[serde(default)]
    pub strategies: Vec<Strategy>,

    /// Seed for fingerprint anchors. Drawn fresh when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_json: bool,
}

/// Values that take precedence over both the file and the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub strategies: Vec<Strategy>,
    pub fingerprint_trials: Option<usize>,
    pub seed: Option<u64>,
    pub use_parallel: Option<bool>,
}

impl DetectConfig {
    /// Load a YAML file, apply `DUPESCAN__*` environment overrides and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        Self::load_with(path, &ConfigOverrides::default())
    }

    /// Like [`DetectConfig::load`], with CLI overrides applied last.
    pub fn load_with(
        path: impl AsRef<Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let builder = Config::builder()
            .add_source(File::from(path).format(FileFormat::Yaml))
            .add_source(environment());
        let cfg: DetectConfig = apply_overrides(builder, overrides)?
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse YAML configuration from a string. The environment is not consulted.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let cfg: DetectConfig = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        if self.stopwords.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "stopwords path must not be empty".to_string(),
            ));
        }
        if self.strategies.is_empty() {
            return Err(ConfigLoadError::NoStrategies);
        }

        self.canonical
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("strategies")
}

fn apply_overrides(
    mut builder: config::ConfigBuilder<config::builder::DefaultState>,
    overrides: &ConfigOverrides,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigLoadError> {
    if !overrides.strategies.is_empty() {
        let names: Vec<&str> = overrides.strategies.iter().map(Strategy::as_str).collect();
        builder = builder.set_override("strategies", names)?;
    }
    if let Some(trials) = overrides.fingerprint_trials {
        builder = builder.set_override("matcher.fingerprint_trials", trials as u64)?;
    }
    if let Some(seed) = overrides.seed {
        builder = builder.set_override("seed", seed)?;
    }
    if let Some(parallel) = overrides.use_parallel {
        builder = builder.set_override("matcher.use_parallel", parallel)?;
    }
    Ok(builder)
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
version: "1.0"
stopwords: stopwords.txt
strategies: [exact, cosine]
"#;

    #[test]
    fn minimal_yaml_fills_defaults() {
        let cfg = DetectConfig::from_yaml(MINIMAL).expect("valid");
        assert_eq!(cfg.strategies, vec![Strategy::Exact, Strategy::Cosine]);
        assert_eq!(cfg.matcher, MatchConfig::default());
        assert_eq!(cfg.canonical, CanonicalizeConfig::default());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.left.label("left"), "left");
    }

    #[test]
    fn full_yaml_parsed() {
        let yaml = r#"
version: "1"
stopwords: data/stop.txt
left:
  name: cnnbrk
  timeline: data/cnnbrk.json
  inserts: data/insert1.txt
right:
  inserts: data/insert2.txt
canonical:
  version: 1
  strip_urls: false
matcher:
  word_threshold: 0.25
  cosine_threshold: 0.75
  fingerprint_trials: 3
strategies: [word_overlap, fingerprint]
seed: 42
log_json: true
"#;
        let cfg = DetectConfig::from_yaml(yaml).expect("valid");
        assert_eq!(cfg.left.label("left"), "cnnbrk");
        assert_eq!(cfg.right.timeline, None);
        assert_eq!(cfg.right.inserts, Some(PathBuf::from("data/insert2.txt")));
        assert!(!cfg.canonical.strip_urls);
        assert!(cfg.canonical.lowercase);
        assert_eq!(cfg.matcher.word_threshold, 0.25);
        assert_eq!(cfg.matcher.fingerprint_trials, 3);
        assert_eq!(cfg.seed, Some(42));
        assert!(cfg.log_json);
    }

    #[test]
    fn missing_strategies_rejected() {
        let yaml = "version: \"1.0\"\nstopwords: s.txt\n";
        assert!(matches!(
            DetectConfig::from_yaml(yaml),
            Err(ConfigLoadError::NoStrategies)
        ));
    }

    #[test]
    fn unknown_version_rejected() {
        let yaml = "version: \"2.0\"\nstopwords: s.txt\nstrategies: [exact]\n";
        match DetectConfig::from_yaml(yaml) {
            Err(ConfigLoadError::UnsupportedVersion(v)) => assert_eq!(v, "2.0"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let yaml = concat!(
            "version: \"1.0\"\nstopwords: s.txt\nstrategies: [cosine]\n",
            "matcher:\n  cosine_threshold: 1.0\n",
        );
        assert!(matches!(
            DetectConfig::from_yaml(yaml),
            Err(ConfigLoadError::Validation(_))
        ));
    }

    #[test]
    fn unknown_strategy_is_a_source_error() {
        let yaml = "version: \"1.0\"\nstopwords: s.txt\nstrategies: [levenshtein]\n";
        assert!(matches!(
            DetectConfig::from_yaml(yaml),
            Err(ConfigLoadError::Source(_))
        ));
    }

    #[test]
    fn cli_overrides_win_over_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dupescan.yaml");
        std::fs::write(
            &path,
            "version: \"1.0\"\nstopwords: s.txt\nmatcher:\n  fingerprint_trials: 4\n",
        )
        .expect("write");

        let overrides = ConfigOverrides {
            strategies: vec![Strategy::Fingerprint],
            fingerprint_trials: Some(7),
            seed: Some(9),
            use_parallel: Some(true),
        };
        let cfg = DetectConfig::load_with(&path, &overrides).expect("valid");
        assert_eq!(cfg.strategies, vec![Strategy::Fingerprint]);
        assert_eq!(cfg.matcher.fingerprint_trials, 7);
        assert_eq!(cfg.seed, Some(9));
        assert!(cfg.matcher.use_parallel);
    }
}
