use serde::{Deserialize, Serialize};

/// A stored vault entry: a (service, username, password) tuple.
///
/// Passwords are kept as plain text; the vault defines no at-rest protection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordEntry {
    pub id: i64,
    pub service: String,
    pub username: String,
    pub password: String,
    pub created_at: i64,
}

/// Options for generating a random password.
///
/// Lowercase and uppercase letters are always part of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenOptions {
    pub length: i64,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl PasswordGenOptions {
    pub fn new(length: i64, include_numbers: bool, include_symbols: bool) -> Self {
        Self { length, include_numbers, include_symbols }
    }
}

impl Default for PasswordGenOptions {
    fn default() -> Self {
        Self { length: 16, include_numbers: true, include_symbols: true }
    }
}
