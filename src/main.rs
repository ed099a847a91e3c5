use anyhow::Result;
use clap::Parser;

use projectography::logging::{init_tracing, LogSink};

fn main() -> Result<()> {
    let cli = projectography::cli::Cli::parse();

    match cli.command.clone() {
        Some(projectography::cli::CliCommand::Tui) | None => {
            let config = projectography::config::from_cli(&cli)?;
            // The alternate screen owns stderr while the browser runs.
            init_tracing(cli.log_filter.as_deref(), LogSink::File(config.log_path()))?;
            projectography::tui::run(config)?;
        }
        Some(command) => {
            init_tracing(cli.log_filter.as_deref(), LogSink::Stderr)?;
            let config = projectography::config::from_cli(&cli)?;
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            projectography::commands::execute(&config, command, &mut handle)?;
        }
    }

    Ok(())
}
