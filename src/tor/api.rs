//! Native entry seam
//!
//! The embedding API of a linked Tor is reduced to two calls: build a
//! configuration from an argument vector, then run the daemon with it.
//! Everything the configuration borrows is owned by the returned value and
//! released on drop.

use std::ffi::{c_char, c_int, CStr, CString, NulError};

/// Program name placed in `argv[0]`
pub const PROGRAM_NAME: &CStr = c"tor";

/// Owned, NUL-terminated C argument vector
///
/// The pointer table stays valid for as long as the `ArgVector` lives, so
/// native code may hold on to it until the owning configuration is freed.
#[derive(Debug)]
pub struct ArgVector {
    args: Vec<CString>,
    ptrs: Vec<*mut c_char>,
}

// The pointers only ever refer to `args`, which moves with the vector.
unsafe impl Send for ArgVector {}

impl ArgVector {
    /// Build `argv` as `tor` followed by `args`
    ///
    /// Fails with the index (into `args`) of the first argument holding an
    /// interior NUL byte.
    pub fn new(args: &[String]) -> Result<Self, (usize, NulError)> {
        let mut owned = Vec::with_capacity(args.len() + 1);
        owned.push(CString::from(PROGRAM_NAME));
        for (index, arg) in args.iter().enumerate() {
            owned.push(CString::new(arg.as_str()).map_err(|e| (index, e))?);
        }

        let mut ptrs: Vec<*mut c_char> = owned
            .iter()
            .map(|s| s.as_ptr() as *mut c_char)
            .collect();
        ptrs.push(std::ptr::null_mut());

        Ok(Self { args: owned, ptrs })
    }

    /// Number of arguments, program name included
    pub fn argc(&self) -> c_int {
        self.args.len() as c_int
    }

    /// Pointer table suitable for `char **argv`
    pub fn argv(&mut self) -> *mut *mut c_char {
        self.ptrs.as_mut_ptr()
    }

    /// Arguments as Rust strings, program name included
    pub fn to_strings(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }
}

/// Embedding interface of a linked Tor
pub trait TorApi: Send + Sync + 'static {
    /// Native configuration; dropping it frees every native resource,
    /// including the argument vector it was built from
    type Config: Send + 'static;

    /// Build a configuration from `argv`. A non-zero native code is
    /// returned as the error and nothing is leaked.
    fn configure(&self, argv: ArgVector) -> Result<Self::Config, i32>;

    /// Run the daemon to completion. Blocks the calling thread.
    fn run_main(&self, config: &Self::Config) -> i32;
}
