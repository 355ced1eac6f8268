use std::fs;
use std::io;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 监听地址
    pub host: String,
    pub port: u16,
    /// 为空时使用actix默认的worker数量
    pub workers: Option<usize>,
    /// json请求体的最大字节数
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 5000,
            workers: None,
            json_limit: 64 * 1024,
        }
    }
}

impl Config {
    /// 配置文件不存在时返回默认配置
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Config::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(contents: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

lazy_static! {
    pub static ref CONFIG: Config = match Config::load(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}，使用默认配置", e);
            Config::default()
        }
    };
}
