//! Configuration loading and validation
//!
//! TOML configuration describing how the embedded Tor is launched.
//! Immutable after load.

pub mod file;
mod validation;

pub use file::{load_config, load_from_path};
pub use validation::validate;

use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub tor: TorConfig,
}

/// Launch options rendered into Tor's command line
#[derive(Debug, Clone, Deserialize)]
pub struct TorConfig {
    /// Tor's DataDirectory
    pub data_directory: PathBuf,
    /// Optional torrc passed with `-f`
    pub torrc: Option<PathBuf>,
    /// SOCKS listener port (0 disables it)
    #[serde(default = "default_socks_port")]
    pub socks_port: u16,
    /// ControlPort; unset leaves Tor's default (disabled)
    pub control_port: Option<u16>,
    /// Where Tor writes the control port address once listening
    pub control_port_write_to_file: Option<PathBuf>,
    #[serde(default)]
    pub cookie_authentication: bool,
    /// Tor log line, e.g. "notice stdout"
    pub log: Option<String>,
    /// Appended verbatim after everything else
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_socks_port() -> u16 {
    9050
}

impl TorConfig {
    /// Minimal config for a data directory, everything else defaulted
    pub fn new(data_directory: impl Into<PathBuf>) -> Self {
        Self {
            data_directory: data_directory.into(),
            torrc: None,
            socks_port: default_socks_port(),
            control_port: None,
            control_port_write_to_file: None,
            cookie_authentication: false,
            log: None,
            extra_args: Vec::new(),
        }
    }

    /// Tor command line, without the program name
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(torrc) = &self.torrc {
            args.push("-f".to_string());
            args.push(torrc.display().to_string());
        }

        args.push("--DataDirectory".to_string());
        args.push(self.data_directory.display().to_string());

        args.push("--SocksPort".to_string());
        args.push(self.socks_port.to_string());

        if let Some(port) = self.control_port {
            args.push("--ControlPort".to_string());
            args.push(port.to_string());
        }

        if let Some(path) = &self.control_port_write_to_file {
            args.push("--ControlPortWriteToFile".to_string());
            args.push(path.display().to_string());
        }

        if self.cookie_authentication {
            args.push("--CookieAuthentication".to_string());
            args.push("1".to_string());
        }

        if let Some(log) = &self.log {
            args.push("--Log".to_string());
            args.push(log.clone());
        }

        args.extend(self.extra_args.iter().cloned());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let tor = TorConfig::new("/var/lib/embedtor");
        assert_eq!(
            tor.to_args(),
            vec!["--DataDirectory", "/var/lib/embedtor", "--SocksPort", "9050"]
        );
    }

    #[test]
    fn test_full_args_order() {
        let tor = TorConfig {
            data_directory: PathBuf::from("/data"),
            torrc: Some(PathBuf::from("/etc/tor/torrc")),
            socks_port: 0,
            control_port: Some(9051),
            control_port_write_to_file: Some(PathBuf::from("/data/control")),
            cookie_authentication: true,
            log: Some("notice stdout".to_string()),
            extra_args: vec!["--ClientOnly".to_string(), "1".to_string()],
        };

        assert_eq!(
            tor.to_args(),
            vec![
                "-f",
                "/etc/tor/torrc",
                "--DataDirectory",
                "/data",
                "--SocksPort",
                "0",
                "--ControlPort",
                "9051",
                "--ControlPortWriteToFile",
                "/data/control",
                "--CookieAuthentication",
                "1",
                "--Log",
                "notice stdout",
                "--ClientOnly",
                "1",
            ]
        );
    }

    #[test]
    fn test_parse_defaults() {
        let config: Config = toml::from_str(
            r#"
            [tor]
            data_directory = "/var/lib/embedtor"
            "#,
        )
        .unwrap();

        assert_eq!(config.tor.socks_port, 9050);
        assert!(config.tor.control_port.is_none());
        assert!(!config.tor.cookie_authentication);
        assert!(config.tor.extra_args.is_empty());
    }
}
