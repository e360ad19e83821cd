// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use highhand_server::server;
use log::error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    /// The server listening address.
    #[clap(long, short, default_value = "127.0.0.1")]
    address: String,
    /// The server listening port.
    #[clap(long, short, default_value_t = 3001)]
    port: u16,
    /// The hands database path, uses an in memory database when not set.
    #[clap(long)]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = highhand_server::Config {
        address: cli.address,
        port: cli.port,
        db_path: cli.db,
    };

    if let Err(e) = server::run(config).await {
        error!("{e}");
    }
}
