use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if any adapter tuning value is out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.adapter.temperature) {
            anyhow::bail!(
                "adapter.temperature must be within [0.0, 1.0], got {}",
                self.adapter.temperature
            );
        }

        if self.adapter.max_input_tokens == 0 {
            anyhow::bail!("adapter.max_input_tokens must be greater than zero");
        }

        if self.adapter.max_output_tokens == 0 {
            anyhow::bail!("adapter.max_output_tokens must be greater than zero");
        }

        if self.adapter.default_model.is_empty() {
            anyhow::bail!("adapter.default_model must not be empty");
        }

        Ok(())
    }
}
