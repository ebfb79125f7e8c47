//! Static link setup for the `linked-tor` feature.
//!
//! Expects a tor-static style tree (tor, libevent, xz, zlib, openssl built
//! as static archives) under `TOR_STATIC_DIR`.

use std::env;
use std::path::PathBuf;

/// (directory relative to TOR_STATIC_DIR, libraries found there)
const STATIC_LIBS: &[(&str, &[&str])] = &[
    ("tor/src/or", &["tor"]),
    (
        "tor/src/common",
        &["or", "or-crypto", "curve25519_donna", "or-ctime", "or-event"],
    ),
    ("tor/src/trunnel", &["or-trunnel"]),
    ("tor/src/ext/keccak-tiny", &["keccak-tiny"]),
    ("tor/src/ext/ed25519/ref10", &["ed25519_ref10"]),
    ("tor/src/ext/ed25519/donna", &["ed25519_donna"]),
    ("libevent/dist/lib", &["event"]),
    ("xz/dist/lib", &["lzma"]),
    ("zlib/dist/lib", &["z"]),
    ("openssl/dist/lib", &["ssl", "crypto"]),
];

fn main() {
    println!("cargo:rerun-if-env-changed=TOR_STATIC_DIR");

    if env::var_os("CARGO_FEATURE_LINKED_TOR").is_none() {
        return;
    }

    let root = env::var_os("TOR_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("../tor-static"));

    for (dir, libs) in STATIC_LIBS {
        println!("cargo:rustc-link-search=native={}", root.join(dir).display());
        for lib in *libs {
            println!("cargo:rustc-link-lib=static={}", lib);
        }
    }

    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        for lib in ["ws2_32", "crypt32", "gdi32", "pthread"] {
            println!("cargo:rustc-link-lib={}", lib);
        }
    } else {
        println!("cargo:rustc-link-lib=m");
    }
}
