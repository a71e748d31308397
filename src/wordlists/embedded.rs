//! Embedded word list
//!
//! Word list compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Built-in vocabulary used when a word source yields nothing usable
pub const FALLBACK: &[&str] = &[
    "APPLE", "GRAPE", "MANGO", "PEACH", "LEMON", "BERRY", "CHILI", "OLIVE",
];
