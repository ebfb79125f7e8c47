//! Statically linked Tor

use super::api::{ArgVector, TorApi};
use super::sys;
use tracing::debug;

/// The Tor library linked into this binary
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedTor;

/// Native configuration plus the argv it borrows
pub struct LinkedConfig {
    raw: *mut sys::tor_main_configuration_t,
    // Referenced by `raw`; dropped after it
    _argv: ArgVector,
}

// The configuration is only touched by one thread at a time: built on the
// starting thread, then moved to the thread running `tor_run_main`.
unsafe impl Send for LinkedConfig {}

impl Drop for LinkedConfig {
    fn drop(&mut self) {
        unsafe { sys::tor_main_configuration_free(self.raw) };
    }
}

impl TorApi for LinkedTor {
    type Config = LinkedConfig;

    fn configure(&self, mut argv: ArgVector) -> Result<LinkedConfig, i32> {
        let raw = unsafe { sys::tor_main_configuration_new() };
        if raw.is_null() {
            return Err(-1);
        }

        let code =
            unsafe { sys::tor_main_configuration_set_command_line(raw, argv.argc(), argv.argv()) };

        // From here on the drop order of LinkedConfig frees both halves
        let config = LinkedConfig { raw, _argv: argv };
        if code != 0 {
            debug!("tor_main_configuration_set_command_line returned {}", code);
            return Err(code);
        }

        Ok(config)
    }

    fn run_main(&self, config: &LinkedConfig) -> i32 {
        unsafe { sys::tor_run_main(config.raw) }
    }
}
