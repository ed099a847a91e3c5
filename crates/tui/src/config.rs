pub use projectography_core::config::*;
pub use projectography_core::AppConfig;

use crate::cli::Cli;

pub fn from_cli(cli: &Cli) -> anyhow::Result<AppConfig> {
    AppConfig::discover(cli.data_dir.clone(), cli.catalog.clone())
}
