pub mod config;
pub mod display;
pub mod toggle;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
