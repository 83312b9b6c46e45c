use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives applied when `RUST_LOG` is not set.
pub fn default_directives(level: &str) -> String {
    format!("list_server={level},list_store={level}")
}

/// Install the global fmt subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(env_filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_cover_both_crates() {
        assert_eq!(default_directives("debug"), "list_server=debug,list_store=debug");
    }
}
