use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_VAR: &str = "ROSTER_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "roster.toml";

/// One of the management systems, or all of them
#[derive(ValueEnum, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SystemName {
    Employee,
    Hospital,
    Inventory,
    Library,
    Restaurant,
    All,
}

impl SystemName {
    /// The concrete systems this name stands for
    pub fn expand(self) -> &'static [SystemName] {
        static EVERY: [SystemName; 5] = [
            SystemName::Employee,
            SystemName::Hospital,
            SystemName::Inventory,
            SystemName::Library,
            SystemName::Restaurant,
        ];
        match self {
            SystemName::All => &EVERY,
            SystemName::Employee => &EVERY[0..1],
            SystemName::Hospital => &EVERY[1..2],
            SystemName::Inventory => &EVERY[2..3],
            SystemName::Library => &EVERY[3..4],
            SystemName::Restaurant => &EVERY[4..5],
        }
    }
}

impl fmt::Display for SystemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SystemName::Employee => "employee",
            SystemName::Hospital => "hospital",
            SystemName::Inventory => "inventory",
            SystemName::Library => "library",
            SystemName::Restaurant => "restaurant",
            SystemName::All => "all",
        };
        f.write_str(name)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("unknown log format '{other}' (expected 'text' or 'json')"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter(), format: LogFormat::default() }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Systems replayed by `roster demo` when none is named
    #[serde(default = "default_systems")]
    pub systems: Vec<SystemName>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { systems: default_systems() }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    /// File the configuration was read from; `None` when defaults were used
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl RosterConfig {
    /// Load from `ROSTER_CONFIG_PATH`, or `roster.toml` in the working directory
    pub fn load() -> anyhow::Result<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// A missing file yields the defaults; an unreadable or malformed one is an error
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let mut config = Self::parse(&contents).with_context(|| {
                    format!("failed to parse configuration file '{}'", path.display())
                })?;
                config.source = Some(path.to_path_buf());
                Ok(config)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err)
                .with_context(|| format!("failed to read configuration file '{}'", path.display())),
        }
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_env_overrides(self) -> anyhow::Result<Self> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply `ROSTER_LOG` and `ROSTER_LOG_FORMAT` as read through `lookup`
    pub fn apply_overrides<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup("ROSTER_LOG") {
            self.logging.filter = filter;
        }
        if let Some(format) = lookup("ROSTER_LOG_FORMAT") {
            self.logging.format = format.parse().context("invalid ROSTER_LOG_FORMAT")?;
        }
        Ok(self)
    }

    /// Systems the configured demo set expands to, in order, without repeats
    pub fn demo_systems(&self) -> Vec<SystemName> {
        let mut systems = Vec::new();
        for name in &self.demo.systems {
            for &system in name.expand() {
                if !systems.contains(&system) {
                    systems.push(system);
                }
            }
        }
        systems
    }
}

fn default_filter() -> String {
    "roster_core=info,roster_cli=info,warn".to_string()
}

fn default_systems() -> Vec<SystemName> {
    vec![SystemName::All]
}
