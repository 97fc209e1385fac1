//! GlassDesk: backend for a small desktop utility (dashboard, notes,
//! password generator, credential vault, remote-access screen).
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
pub mod views;
