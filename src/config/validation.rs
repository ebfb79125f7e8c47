//! Configuration validation
//!
//! Fail-fast validation of configuration invariants.

use super::{Config, TorConfig};
use anyhow::{bail, Result};

/// Validate configuration invariants
pub fn validate(config: &Config) -> Result<()> {
    validate_tor(&config.tor)?;
    validate_args(&config.tor)?;
    Ok(())
}

fn validate_tor(tor: &TorConfig) -> Result<()> {
    if tor.data_directory.as_os_str().is_empty() {
        bail!("tor.data_directory cannot be empty");
    }

    if let Some(torrc) = &tor.torrc {
        if !torrc.exists() {
            bail!("tor.torrc not found: {:?}", torrc);
        }
    }

    if let Some(control_port) = tor.control_port {
        if control_port != 0 && control_port == tor.socks_port {
            bail!(
                "tor.control_port ({}) must differ from tor.socks_port",
                control_port
            );
        }
    }

    Ok(())
}

/// Arguments cross into C strings, which cannot hold NUL
fn validate_args(tor: &TorConfig) -> Result<()> {
    if let Some(arg) = tor.to_args().iter().find(|arg| arg.contains('\0')) {
        bail!("Tor argument contains a NUL byte: {:?}", arg);
    }
    Ok(())
}
