use serde::Deserialize;

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Optional per-request read deadline in milliseconds. When unset, a
    /// client that never finishes its request stalls its own task.
    #[serde(default)]
    pub read_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            read_timeout_ms: None,
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `OUTPOST_CONFIG`,
    /// falling back to the `LISTEN` env var over built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = std::env::var("OUTPOST_CONFIG") {
            let text = std::fs::read_to_string(&path)?;
            let cfg = serde_yaml::from_str(&text)?;
            return Ok(cfg);
        }

        let mut cfg = Config::default();
        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }
        Ok(cfg)
    }
}
