use crate::config::toml_config::TomlConfig;
use crate::domain::model::StatusFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "quantum-depot")]
#[command(about = "Quantum depot control panel")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for reproducible object generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// How object status lines are rendered
    #[arg(long, value_enum)]
    pub format: Option<StatusFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file (if any) and layers the command line flags on top.
    /// Runs before logging is set up, so it does not log.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.factory.seed = Some(seed);
        }
        if let Some(format) = self.format {
            config.display.format = Some(format);
        }

        config.validate()?;
        Ok(config)
    }
}
