//! Configuration for the secret terminal.
//!
//! The password, riddle and domain data are flavor text rather than a
//! security boundary, so hosts can override all of them. Configuration is
//! loaded from `~/.config/secterm/config.toml`; every field has a default.
//!
//! ```toml
//! password = "legion"
//! lockout_ms = 5000
//! regions = ["americas", "europe", "asia-pacific"]
//!
//! [riddle]
//! keywords = ["unmanned", "vehicle"]
//! ```

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Host-configurable shell constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Secret accepted after `login`. Compared case-sensitively.
    pub password: String,

    /// Consecutive wrong passwords that trigger a lockout alert.
    pub lockout_threshold: NonZeroU32,

    /// Alert duration for a lockout, in milliseconds.
    pub lockout_ms: u64,

    /// Alert duration for `sudo su`, in milliseconds.
    pub sudo_alert_ms: u64,

    /// Easter egg id emitted on a successful login.
    pub unlock_id: String,

    /// The riddle sub-state.
    pub riddle: RiddleConfig,

    /// Paths that `cat` refuses to read unless authenticated, with
    /// everything below them. Relative entries are taken from `/`.
    pub protected: Vec<String>,

    /// Region keys known to `goto`, `scan` and `uxv`.
    pub regions: Vec<String>,

    /// Company names known to `goto`, `scan` and `uxv`.
    pub companies: Vec<String>,

    /// Content of `/secrets`.
    pub secret: String,

    /// Banner shown by hosts when the terminal opens.
    pub motd: Vec<String>,
}

/// The riddle gating the second easter egg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiddleConfig {
    pub prompt: Vec<String>,
    /// Every keyword must appear in the answer, case-insensitively.
    /// An empty list accepts nothing.
    pub keywords: Vec<String>,
    pub hint: String,
    pub success: String,
    pub unlock_id: String,
}

impl Default for RiddleConfig {
    fn default() -> Self {
        Self {
            prompt: vec![
                "I fly without a pilot and see without eyes.".to_string(),
                "I go wherever I am sent and report what I find.".to_string(),
                "What am I?".to_string(),
            ],
            keywords: vec!["unmanned".to_string(), "vehicle".to_string()],
            hint: "Not quite. Think about who is (not) at the controls.".to_string(),
            success: "Correct. The fleet salutes you.".to_string(),
            unlock_id: "riddle".to_string(),
        }
    }
}

impl RiddleConfig {
    /// True if `answer` contains every keyword, ignoring case.
    pub fn accepts(&self, answer: &str) -> bool {
        if self.keywords.is_empty() {
            return false;
        }
        let answer = answer.to_lowercase();
        self.keywords
            .iter()
            .all(|keyword| answer.contains(&keyword.to_lowercase()))
    }
}

const DEFAULT_LOCKOUT_THRESHOLD: NonZeroU32 = NonZeroU32::MIN.saturating_add(2);

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            password: "legion".to_string(),
            lockout_threshold: DEFAULT_LOCKOUT_THRESHOLD,
            lockout_ms: 5_000,
            sudo_alert_ms: 3_000,
            unlock_id: "root-access".to_string(),
            riddle: RiddleConfig::default(),
            protected: vec!["/secrets".to_string()],
            regions: vec![
                "americas".to_string(),
                "europe".to_string(),
                "middle-east".to_string(),
                "asia-pacific".to_string(),
            ],
            companies: vec![
                "Northwind Defense".to_string(),
                "Helix Aerospace".to_string(),
                "Blackwater Maritime".to_string(),
            ],
            secret: "CLASSIFIED // EYES ONLY\nOperation LEGION is a go.\nRendezvous coordinates withheld."
                .to_string(),
            motd: vec![
                "SECURE TERMINAL v2.7".to_string(),
                "Unauthorized access is prohibited.".to_string(),
                "Type 'help' for a list of commands.".to_string(),
            ],
        }
    }
}

impl ShellConfig {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        anyhow::ensure!(
            config.riddle.keywords.iter().any(|k| !k.trim().is_empty()),
            "riddle.keywords must name at least one keyword"
        );
        config.riddle.keywords.retain(|k| !k.trim().is_empty());
        config.protected = config
            .protected
            .iter()
            .map(|p| crate::paths::resolve("/", p))
            .collect();
        Ok(config)
    }

    /// Get the default config file path.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "secterm")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// True if `path` (canonical) is behind the root-only gate.
    ///
    /// Entries are canonicalized here too, so a config built in code with
    /// `"secrets"` or `"/secrets/"` still guards `/secrets`.
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected
            .iter()
            .map(|entry| crate::paths::resolve("/", entry))
            .any(|prefix| crate::paths::is_within(path, &prefix))
    }

    /// Find a region or company by name, ignoring case.
    pub fn find_target(&self, name: &str) -> Option<secterm_types::NavTarget> {
        use secterm_types::NavTarget;

        let wanted = name.to_lowercase();
        if let Some(region) = self.regions.iter().find(|r| r.to_lowercase() == wanted) {
            return Some(NavTarget::Region(region.clone()));
        }
        self.companies
            .iter()
            .find(|c| c.to_lowercase() == wanted)
            .map(|c| NavTarget::Company(c.clone()))
    }
}
