//! Scenario functions shared by the integration tests.
//!
//! Each scenario takes any [`ssm_api::SsmApi`] seeded with the default
//! fixtures, so the same checks run against the concrete mock and against
//! the mock behind a trait object.

#![allow(dead_code)]

pub mod scenarios;

/// Install a fmt subscriber once per test binary; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ssm_mock=debug,warn".into()),
        )
        .with_test_writer()
        .try_init();
}
