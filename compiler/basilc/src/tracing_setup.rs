//! Tracing subscriber setup.
//!
//! Nothing is installed unless `BASIL_LOG` or `RUST_LOG` is set, so a normal
//! run pays only for disabled callsites.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Output layout for trace events.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TraceFormat {
    /// One line per event.
    #[default]
    Flat,
    /// Indented by span nesting (`--tree`).
    Tree,
}

/// Install the global subscriber. Later calls do nothing.
///
/// `BASIL_LOG` takes precedence over `RUST_LOG`, e.g.
/// `BASIL_LOG=basil_eval=debug` or `BASIL_LOG=basil_parse=trace`.
pub fn init_tracing(format: TraceFormat) {
    TRACING_INIT.call_once(|| {
        let directives = std::env::var("BASIL_LOG").or_else(|_| std::env::var("RUST_LOG"));
        let Ok(directives) = directives else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let registry = tracing_subscriber::registry().with(filter);
        match format {
            TraceFormat::Flat => registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .init(),
            TraceFormat::Tree => registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init(),
        }
    });
}
