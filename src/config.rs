use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_DB_FILE: &str = "my_database.db";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5001";

/// How long a success notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_FILE),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_constants() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.addr().to_string(), "127.0.0.1:5001");
        assert_eq!(cfg.db_path, PathBuf::from("my_database.db"));
        assert!(DEFAULT_SERVER_URL.ends_with(&DEFAULT_PORT.to_string()));
    }
}
