use {
    anyhow::{anyhow, Result as AnyResult},
    serde::{Deserialize, Serialize},
    std::{
        io::ErrorKind,
        net::{IpAddr, Ipv4Addr, SocketAddr},
        path::{Path, PathBuf},
    },
};

// Where to find the config file.
pub const CONF_PATH: &str = "~/.blob-explorer/conf.toml";

/// Server settings. Every field is optional in the TOML file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConf {
    pub bind_address: IpAddr,
    pub port: u16,
    /// Default `env_logger` filter, `RUST_LOG` still wins.
    pub log_filter: String,
    /// Upper bound for request bodies in bytes.
    pub max_body_bytes: u64,
}

impl Default for ServerConf {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            log_filter: "info".to_string(),
            max_body_bytes: 16 * 1024,
        }
    }
}

impl ServerConf {
    /// Load from `path`. A missing file yields the defaults, any other read or
    /// parse failure is an error.
    pub async fn load_from_path(path: &Path) -> AnyResult<Self> {
        match tokio::fs::read_to_string(path).await {
            Ok(conf) => Ok(toml::from_str(&conf)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Expands `~/` to the user's home directory in path arguments.
pub fn expand_tilde(path: &str) -> AnyResult<PathBuf> {
    if let Some(path) = path.strip_prefix("~/") {
        match home::home_dir() {
            Some(home) => return Ok(home.join(path)),
            None => return Err(anyhow!("Could not find home directory")),
        }
    }

    Ok(path.into())
}
