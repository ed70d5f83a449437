use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use bond_recommender_exchange::DEFAULT_URL;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub iss_url: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Run the initial fetch in the background on start
    pub fetch_on_startup: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("BR_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid BR_LISTEN_ADDR")?;
        let db_path = std::env::var("BR_DB_PATH").unwrap_or_else(|_| "./db/bonds.db".into());
        let iss_url = std::env::var("BR_ISS_URL").unwrap_or_else(|_| DEFAULT_URL.into());
        let cors_allow = std::env::var("BR_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("BR_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let fetch_on_startup = std::env::var("BR_FETCH_ON_STARTUP")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);
        Ok(Self {
            listen_addr,
            db_path,
            iss_url,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            fetch_on_startup,
        })
    }
}
