// GlassDesk services
// Stateless or self-contained functionality: password generation, system stats, IP lookup, settings.

pub mod network_info;
pub mod password_generator;
pub mod settings_engine;
pub mod system_stats;
