use anyhow::Context;
use std::{env, net::SocketAddr, path::PathBuf};

use tracing::info;

use crate::modules::appointments::core::availability::SlotTemplate;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub bind_addr: SocketAddr,
    pub slot_template: SlotTemplate,
    pub session_file: Option<PathBuf>,
    pub admin: Option<AdminSeed>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| {
                info!("BIND_ADDR not set, using default: {DEFAULT_BIND_ADDR}");
                DEFAULT_BIND_ADDR.to_string()
            })
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let slot_template = match var("SLOT_TEMPLATE") {
            Some(value) => SlotTemplate::parse(&value).context("SLOT_TEMPLATE is invalid")?,
            None => {
                info!("SLOT_TEMPLATE not set, using studio hours");
                SlotTemplate::default()
            }
        };

        let admin = match (var("ADMIN_EMAIL"), var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed { email, password }),
            (None, None) => None,
            _ => anyhow::bail!("ADMIN_EMAIL and ADMIN_PASSWORD must be set together"),
        };

        Ok(Self {
            bind_addr,
            slot_template,
            session_file: var("SESSION_FILE").map(PathBuf::from),
            admin,
        })
    }
}
