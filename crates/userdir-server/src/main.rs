use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use userdir_config::{get_log_dir, Config, ServerConfig};
use userdir_server::{build_schema, ApiServer, HandlerContext};

#[derive(Parser)]
#[command(name = "userdir-server")]
#[command(about = "GraphQL API server for the in-memory user directory")]
#[command(version)]
struct Args {
    #[arg(long, help = "Print the GraphQL schema (SDL) and exit")]
    print_schema: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    if args.print_schema {
        let schema = build_schema(HandlerContext::from_config(&config.store));
        println!("{}", schema.sdl());
        return Ok(());
    }

    init_tracing(&config.server)?;

    info!(
        "Starting userdir server (seed={}, id_strategy={})",
        config.store.seed, config.store.id_strategy
    );
    ApiServer::new(&config).run().await
}

fn init_tracing(config: &ServerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(config.log_level.parse()?);

    match &config.log_file {
        Some(path) => {
            let path = PathBuf::from(path);
            let path = if path.is_relative() {
                get_log_dir().join(path)
            } else {
                path
            };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(log_file)
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
