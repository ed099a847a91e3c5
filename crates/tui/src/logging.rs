use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

/// Where trace output goes. The interactive browser owns the terminal, so it
/// logs to a file; one-shot commands log to stderr.
#[derive(Debug, Clone, Copy)]
pub enum LogSink<'a> {
    Stderr,
    File(&'a Path),
}

pub fn init_tracing(filter: Option<&str>, sink: LogSink<'_>) -> Result<()> {
    let env_filter = build_filter(filter)?;

    match sink {
        LogSink::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact()
                .try_init();
        }
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file at {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .compact()
                .try_init();
        }
    }
    Ok(())
}

fn build_filter(filter: Option<&str>) -> Result<EnvFilter> {
    let directive: Directive = filter
        .unwrap_or(DEFAULT_DIRECTIVE)
        .parse()
        .with_context(|| format!("Invalid log directive '{}'", filter.unwrap_or_default()))?;
    Ok(EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_directive() {
        assert!(build_filter(Some("projectography=loud")).is_err());
        assert!(build_filter(None).is_ok());
        assert!(build_filter(Some("projectography_core=debug")).is_ok());
    }
}
