use clap::Parser;
use list_server::config::Args;
use list_server::logging::init_logging;
use list_store::ListStore;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut store = ListStore::new();
    if args.seed_count > 0 {
        let seeded = store.create_many(args.seed_count);
        info!(count = seeded.len(), "seeded placeholder items");
    }

    let listener = TcpListener::bind(&args.addr).await?;
    info!(addr = %args.addr, "listening");
    list_server::run(listener, list_server::shared(store)).await
}
