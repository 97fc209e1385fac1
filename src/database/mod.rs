//! GlassDesk database layer.
//!
//! Provides SQLite connection management and schema migrations.
//!
//! # Usage
//!
//! ```no_run
//! use glassdesk::database::Database;
//!
//! let db = Database::open("glassdesk.db").expect("failed to open database");
//!
//! // Or an in-memory database for tests
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
