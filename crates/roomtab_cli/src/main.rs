//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roomtab_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("roomtab_core ping={}", roomtab_core::ping());
    println!("roomtab_core version={}", roomtab_core::core_version());
}
