use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, deserializes and
    /// validates the result. Relative data paths are resolved against the
    /// directory holding the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let mut config = Self::from_toml(&raw)?;

        if let Some(base) = path.parent() {
            config.data.resolve_relative_to(base);
        }

        tracing::debug!(
            config_path = %path.display(),
            benchmarks = %config.data.benchmarks.display(),
            catalog = %config.data.catalog.display(),
            "configuration loaded"
        );

        Ok(config)
    }

    /// Parse and validate configuration text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.planner.validate().map_err(anyhow::Error::msg)?;
        self.ranking.validate().map_err(anyhow::Error::msg)?;
        if let Some(telemetry) = &self.telemetry {
            telemetry.validate().map_err(anyhow::Error::msg)?;
        }
        Ok(())
    }
}
