//! Tracing subscriber setup for the binary.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 4] = ["gosugen", "gosugen_codegen", "gosugen_core", "gosugen_model"];

/// Install a stderr fmt layer.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// events from this workspace when `verbose` is on.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(directives("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (e.g. in tests); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn directives(level: &str) -> String {
    let mut parts = vec!["warn".to_string()];
    parts.extend(CRATES.iter().map(|krate| format!("{}={}", krate, level)));
    parts.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_directives_cover_workspace() {
        assert_eq!(
            directives("debug"),
            "warn,gosugen=debug,gosugen_codegen=debug,gosugen_core=debug,gosugen_model=debug"
        );
    }
}
