//! Raw bindings to `tor_api.h`

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_int};

/// Opaque `tor_main_configuration_t`
#[repr(C)]
pub struct tor_main_configuration_t {
    _private: [u8; 0],
}

extern "C" {
    pub fn tor_main_configuration_new() -> *mut tor_main_configuration_t;

    /// Stores `argv` by reference; it must outlive the configuration.
    pub fn tor_main_configuration_set_command_line(
        cfg: *mut tor_main_configuration_t,
        argc: c_int,
        argv: *mut *mut c_char,
    ) -> c_int;

    pub fn tor_main_configuration_free(cfg: *mut tor_main_configuration_t);

    pub fn tor_run_main(cfg: *const tor_main_configuration_t) -> c_int;
}
