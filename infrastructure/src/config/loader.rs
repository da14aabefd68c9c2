//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["beanquiz.toml", ".beanquiz.toml"];
const ENV_PREFIX: &str = "BEANQUIZ_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. `BEANQUIZ_` environment variables
    /// 3. Project root: `./beanquiz.toml` or `./.beanquiz.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/beanquiz/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/beanquiz/config.toml` when set, otherwise
    /// the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("beanquiz").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_sources(config_path: Option<&Path>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            lines.push(format!("  [{:^7}] Explicit: {}", mark, path.display()));
        }

        lines.push(format!("  [{:^7}] Env:      {}*", "", ENV_PREFIX));

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [{:^7}] Project:  {}", "FOUND", path.display())),
            None => lines.push(format!(
                "  [{:^7}] Project:  ./{} or ./{}",
                "", PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            lines.push(format!("  [{:^7}] Global:   {}", mark, path.display()));
        }

        lines.push(format!("  [{:^7}] Default:  built-in defaults", ""));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.chart.size, 280.0);
        assert_eq!(config.pacing.gacha_spin_ms, 900);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("beanquiz"));
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[chart]
size = 360.0

[random]
seed = 42
"#
        )
        .unwrap();

        let config = ConfigLoader::load(Some(file.path())).unwrap();
        assert_eq!(config.chart.size, 360.0);
        assert_eq!(config.random.seed, Some(42));
        // Untouched keys keep their defaults
        assert_eq!(config.chart.radius_scale, 0.36);
        assert_eq!(config.pacing.answer_cooldown_ms, 350);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chart]\nsize = \"big\"").unwrap();
        assert!(ConfigLoader::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_describe_sources_mentions_explicit_path() {
        let lines = ConfigLoader::describe_sources(Some(Path::new("/nonexistent/beanquiz.toml")));
        assert!(lines.iter().any(|l| l.contains("MISSING") && l.contains("/nonexistent")));
    }
}
