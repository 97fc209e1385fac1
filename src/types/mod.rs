// GlassDesk shared type definitions
// Each submodule defines types used across the application.

pub mod credential;
pub mod errors;
pub mod note;
pub mod settings;
pub mod stats;
