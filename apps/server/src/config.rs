use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use navfolio_core::portfolio::{AdjustmentNavPolicy, CostBasisOptions};

use crate::auth::AuthConfig;

const DEFAULT_AUTH_USERNAME: &str = "admin";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub cost_basis: CostBasisOptions,
    pub auth: Option<AuthConfig>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("NF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid NF_LISTEN_ADDR")?;
        let db_path = std::env::var("NF_DB_PATH").unwrap_or_else(|_| "./db/navfolio.db".into());
        let cors_allow = std::env::var("NF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("NF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);

        let adjustment_nav = match std::env::var("NF_ADJUSTMENT_NAV") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .parse::<AdjustmentNavPolicy>()
                .map_err(anyhow::Error::msg)
                .context("Invalid NF_ADJUSTMENT_NAV")?,
            _ => AdjustmentNavPolicy::default(),
        };

        let auth = std::env::var("NF_AUTH_PASSWORD_HASH")
            .ok()
            .map(|hash| hash.trim().to_string())
            .filter(|hash| !hash.is_empty())
            .map(|password_hash| AuthConfig {
                username: std::env::var("NF_AUTH_USERNAME")
                    .ok()
                    .filter(|u| !u.is_empty())
                    .unwrap_or_else(|| DEFAULT_AUTH_USERNAME.to_string()),
                password_hash,
            });

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            cost_basis: CostBasisOptions { adjustment_nav },
            auth,
        })
    }
}
