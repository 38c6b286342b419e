use std::path::PathBuf;

use crate::config::ServerConfig;
use crate::server;

pub async fn run(port: u16, db: PathBuf) -> i32 {
    let config = ServerConfig {
        port,
        db_path: db,
        ..ServerConfig::default()
    };
    match server::run(&config).await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            1
        }
    }
}
