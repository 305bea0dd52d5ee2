use clap::Args;

use crate::config::Config;

/// Show the resolved configuration and where each value came from
#[derive(Args)]
pub struct ConfigCommand {}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        println!("Configuration:");
        println!(
            "  api_url:     {} ({})",
            config.api_url.value, config.api_url.source
        );
        println!(
            "  api_token:   {}",
            if config.api_token.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        println!(
            "  state_path:  {} ({})",
            config.state_path.value.display(),
            config.state_path.source
        );
        println!("  sync_report: {}", config.sync_report);
        match &config.config_file {
            Some(path) => println!("  config_file: {}", path.display()),
            None => println!("  config_file: none"),
        }
        Ok(())
    }
}
