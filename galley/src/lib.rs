//! Galley — a restaurant point-of-sale console.
//!
//! The binary in `main.rs` wires these modules into a read/eval loop:
//! `config` + `logger` + `state` boot the process, `console` owns the
//! prompt, `db` holds the per-entity storage operations and `commands`
//! the handlers dispatched per verb.

pub mod commands;
pub mod config;
pub mod console;
pub mod db;
pub mod logger;
pub mod money;
pub mod state;
pub mod util;
