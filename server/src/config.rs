use clap::Parser;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// HTTP host for the in-memory list store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the server to
    #[arg(short, long, env = "LIST_SERVER_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
    /// Number of placeholder items to generate at startup
    #[arg(long, env = "LIST_SERVER_SEED_COUNT", default_value_t = 0)]
    pub seed_count: usize,
    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, env = "LIST_SERVER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["list-server"]).unwrap();
        assert_eq!(args.addr, DEFAULT_ADDR);
        assert_eq!(args.seed_count, 0);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "list-server",
            "--addr",
            "0.0.0.0:8080",
            "--seed-count",
            "12",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.addr, "0.0.0.0:8080");
        assert_eq!(args.seed_count, 12);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn rejects_negative_seed_count() {
        assert!(Args::try_parse_from(["list-server", "--seed-count", "-1"]).is_err());
    }
}
