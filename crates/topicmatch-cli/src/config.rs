//! Configuration management for the topicmatch CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use topicmatch::prelude::*;

const CONFIG_FILE: &str = "topicmatch.toml";

/// topicmatch project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub ranking: RankingPolicy,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub charts: ReportStyle,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Supervisor names, in the same order the model emits its supervisor rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default = "default_supervisors")]
    pub supervisors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
    #[serde(default = "default_formats")]
    pub formats: String,
}

// Default value functions
fn default_output_dir() -> String { "topicmatch-report".to_string() }
fn default_formats() -> String { "html".to_string() }

fn default_supervisors() -> Vec<String> {
    [
        "Helmut Anheier", "Joanna Bryson", "Basak Cali", "Luciana Cingolani", "Cathryn Costello",
        "Mark Dawson", "Christian Flachsland", "Anita Gohdes", "Lukas Graf", "Mark Hallerberg",
        "Gerhard Hammerschmid", "Anke Hassel", "Lion Hirth", "Thurid Hustedt", "Leonardo Iacovone",
        "Markus Jachtenfuchs", "Slava Jankin", "Mark Kayser", "Michaela Kreyenfeld", "Johanna Mair",
        "Sebastien Mena", "Alina Mungiu-Pippidi", "Simon Munzert", "Ronny Patz", "Christine Reh",
        "Andrea Roemmele", "Mujaheed Shaikh", "Dennis Snower", "Daniela Stockman", "Christian Traxler",
        "Kai Wegrich",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            supervisors: default_supervisors(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            formats: default_formats(),
        }
    }
}

impl Config {
    /// Load topicmatch.toml from the current or parent directories, then the
    /// user config directory, falling back to defaults.
    pub fn load() -> Result<Self> {
        let start = std::env::current_dir().context("Failed to read current directory")?;
        match find_config_file(&start).or_else(user_config_file) {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .ranking
            .validate()
            .with_context(|| format!("Invalid [ranking] in {}", path.display()))?;
        config
            .charts
            .validate()
            .with_context(|| format!("Invalid [charts] in {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    pub fn roster(&self) -> Roster {
        Roster::new(self.roster.supervisors.iter().cloned())
    }

    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            policy: self.ranking.clone(),
            ..self.analysis.clone()
        }
    }

    pub fn report_style(&self) -> ReportStyle {
        self.charts.clone()
    }
}

/// Find topicmatch.toml in `start` or its parent directories.
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// `<user config dir>/topicmatch/topicmatch.toml`, if it exists.
fn user_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("topicmatch").join(CONFIG_FILE);
    path.exists().then_some(path)
}

/// Path of the config file `init` writes into a project directory.
pub fn project_config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_has_thirty_one_supervisors() {
        let config = Config::default();
        assert_eq!(config.roster.supervisors.len(), 31);
        assert_eq!(config.roster().get(0), Some("Helmut Anheier"));
        assert_eq!(config.roster().get(30), Some("Kai Wegrich"));
    }

    #[test]
    fn default_config_survives_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = project_config_path(dir.path());
        Config::default().save(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ranking, RankingPolicy::default());
        assert_eq!(loaded.roster.supervisors, default_supervisors());
        assert_eq!(loaded.charts.cloud, WordCloud::default());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ranking]
            top_k = 3

            [roster]
            supervisors = ["Ada Lovelace", "Alan Turing"]
            "#,
        )
        .unwrap();
        assert_eq!(config.ranking.top_k, 3);
        assert_eq!(config.ranking.min_topic_weight, 0.5);
        assert_eq!(config.roster().len(), 2);
        assert_eq!(config.analysis.top_topics, 3);
        assert_eq!(config.output.formats, "html");
    }

    #[test]
    fn invalid_ranking_is_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = project_config_path(dir.path());
        std::fs::write(&path, "[ranking]\ntop_k = 0\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn invalid_cloud_is_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = project_config_path(dir.path());

        std::fs::write(&path, "[charts.cloud]\nmin_font_size = 50.0\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("max_font_size"));

        std::fs::write(&path, "[charts.cloud]\nmin_font_size = 0.0\n").unwrap();
        assert!(Config::load_from(&path).is_err());

        std::fs::write(&path, "[charts.cloud]\nmin_font_size = 8.0\nmax_font_size = 32.0\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.report_style().cloud.max_font_size, 32.0);
    }

    #[test]
    fn config_is_found_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(project_config_path(dir.path()), "").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, project_config_path(dir.path()));
    }

    #[test]
    fn settings_carry_the_policy() {
        let mut config = Config::default();
        config.ranking.top_k = 2;
        config.analysis.top_topics = 4;
        config.charts.words_in_chart = 7;
        let settings = config.analysis_settings();
        assert_eq!(settings.policy.top_k, 2);
        assert_eq!(settings.top_topics, 4);
        assert_eq!(config.report_style().words_in_chart, 7);
    }
}
