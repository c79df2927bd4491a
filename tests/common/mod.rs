//! Shared helpers for the integration tests.
//!
//! Library code logs through the `log` facade; `tracing-subscriber` bridges
//! those records, so `RUST_LOG=monotable=trace` shows width computations
//! alongside the test's own events.
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Enable debug logging in tests
//! - `RUST_LOG=monotable::table=trace` - Log computed column widths
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing

#![allow(dead_code)]

pub mod assertions;

use std::sync::Once;

use monotable::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize test logging. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let use_json = std::env::var("TEST_LOG_JSON").is_ok();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("monotable=debug,test=info"));

        if use_json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// Enter a named span for one phase of a test (setup, execute, verify).
pub fn test_phase(name: &str) -> tracing::span::EnteredSpan {
    let span = tracing::info_span!("test_phase", phase = name);
    tracing::info!(phase = name, "entering test phase");
    span.entered()
}

/// Record what a test is about before it starts.
pub fn log_test_context(test_name: &str, description: &str) {
    tracing::info!(
        test_name = test_name,
        description = description,
        "test context"
    );
}

/// The two-column score table used across the suites:
/// `{:<10}{:>5}` with a header, two data rows and a full separator.
pub fn score_table() -> Table {
    let style = Style::new("{:<10}{:>5}").expect("valid style");
    let mut table = Table::new(style);
    table
        .extend_rows([
            header!["Name", "Score"],
            data!["Alice", 10],
            data!["漢字", 5],
            Row::default_line(),
        ])
        .expect("rows fit");
    table
}

/// Render `table` and split it into lines.
pub fn render_lines(table: &Table) -> Vec<String> {
    table.render().lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_phase_logging() {
        init_test_logging();
        {
            let _setup = test_phase("setup");
            tracing::debug!("building table");
        }
        let _verify = test_phase("verify");
        assert_eq!(render_lines(&score_table()).len(), 4);
    }
}
