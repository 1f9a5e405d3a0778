//! Runtime configuration, layered from defaults, `config.toml` and
//! `OLYMPICS_*` environment variables (highest precedence last).

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:        String,
  pub port:        u16,
  /// Where the dataset lives: an `http(s)://` URL or a file path.
  pub data_source: String,
}

impl ServerConfig {
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("data_source", "data/olympic.json")?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("OLYMPICS"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}
