// GlassDesk state managers
// Managers own the persistent collections: notes and vault entries.

pub mod note_manager;
pub mod vault_manager;
