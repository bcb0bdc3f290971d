use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

// Identifiable defines the key a persistent object is stored under
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

pub const DEFAULT_PORT: u16 = 8080;

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }

    /// Reads `CATALOG_BRANCH`, `CATALOG_HOST`, `CATALOG_PORT` and `CATALOG_LOG_LEVEL`,
    /// keeping the default for anything unset or unparseable.
    ///
    /// Runs before logging is set up, so rejected values come back as warnings for the
    /// caller to log.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
        where F: Fn(&str) -> Option<String> {
        let mut warnings = vec![];
        let mut config = Configuration::new(
            lookup("CATALOG_BRANCH").as_deref().unwrap_or("dev"));
        if let Some(host) = lookup("CATALOG_HOST") {
            config.host = parse_or(&host, config.host, "CATALOG_HOST", &mut warnings);
        }
        if let Some(port) = lookup("CATALOG_PORT") {
            config.port = parse_or(&port, config.port, "CATALOG_PORT", &mut warnings);
        }
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            if tracing::Level::from_str(level.as_str()).is_ok() {
                config.log_level = level;
            } else {
                warnings.push(format!("ignoring unparseable CATALOG_LOG_LEVEL {:?}", level));
            }
        }
        (config, warnings)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn max_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

fn parse_or<T: FromStr + Copy>(value: &str, default: T, key: &str, warnings: &mut Vec<String>) -> T {
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warnings.push(format!("ignoring unparseable {} {:?}", key, value));
            default
        }
    }
}
