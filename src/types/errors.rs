use thiserror::Error;

// === GeneratorError ===

/// Errors related to password generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// The requested length or option set cannot produce a password.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The system random number generator failed.
    #[error("Random generation failed: {0}")]
    RandomGeneration(String),
}

// === NoteError ===

/// Errors related to note storage operations.
#[derive(Debug, Error)]
pub enum NoteError {
    /// Note with the given ID was not found.
    #[error("Note not found: {0}")]
    NotFound(i64),
    /// The note content failed validation.
    #[error("Invalid note: {0}")]
    Validation(String),
    /// Database operation failed.
    #[error("Note database error: {0}")]
    DatabaseError(String),
}

// === VaultError ===

/// Errors related to credential vault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Entry with the given ID was not found.
    #[error("Vault entry not found: {0}")]
    NotFound(i64),
    /// A required field was missing or empty.
    #[error("Invalid vault entry: {0}")]
    Validation(String),
    /// Database operation failed.
    #[error("Vault database error: {0}")]
    DatabaseError(String),
}

// === NetworkError ===

/// Errors raised while discovering this machine's IP address.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// No usable interface or socket could be opened.
    #[error("Network unavailable: {0}")]
    Unavailable(String),
    /// The external lookup request failed.
    #[error("IP lookup request failed: {0}")]
    RequestFailed(String),
    /// The lookup answered with something that is not an IP address.
    #[error("Invalid IP address in response: {0}")]
    InvalidResponse(String),
    /// Public lookup was requested but the crate was built without it.
    #[error("Public IP lookup is not supported in this build")]
    Unsupported,
}

// === SettingsError ===

/// Errors related to loading, saving and updating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File system I/O failed.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// The settings file could not be (de)serialized.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The dot-path key does not name a setting.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The value has the wrong type or violates a settings constraint.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === BridgeError ===

/// Errors surfaced by a command bridge to the view layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// The backend rejected or failed the command.
    #[error("{command} failed: {message}")]
    Command { command: String, message: String },
    /// The backend answered with a payload of an unexpected shape.
    #[error("Unexpected response from {command}: {message}")]
    Decode { command: String, message: String },
}
