//! Tracing setup

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Install the global JSON subscriber.
///
/// `service.log_level` is parsed as an `EnvFilter` directive and falls back
/// to `info` when it does not parse. Fails if a global subscriber is already
/// installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.service.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .try_init()
        .map_err(|e| Error::Tracing(e.to_string()))?;

    tracing::info!(
        service = %config.service.name,
        environment = %config.service.environment,
        "Tracing initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_reports_error() {
        let config = Config::default();
        // The first call may or may not win, depending on test ordering
        let _ = init_tracing(&config);
        let second = init_tracing(&config);
        assert!(matches!(second, Err(Error::Tracing(_))));
    }
}
