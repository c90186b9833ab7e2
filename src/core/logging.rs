//! Console logging
//!
//! Records go through the `log` facade. On wasm32 `console_log` forwards
//! them to the browser console; native builds (tests, tooling) drop them.

use log::Level;

/// Install the console logger. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: Level) {
    console_log::init_with_level(level).ok();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(_level: Level) {}
