//! The backend command bridge as seen from the views.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::app::App;
use crate::rpc_handler::handle_method;
use crate::types::errors::BridgeError;

/// Invokes a named backend command with JSON arguments.
///
/// Implementations block until the backend answers.
pub trait CommandBridge: Send + Sync {
    fn invoke(&self, command: &str, params: Value) -> Result<Value, BridgeError>;
}

/// Invokes `command` and decodes the result into `T`.
pub fn invoke_as<T: DeserializeOwned>(
    bridge: &dyn CommandBridge,
    command: &str,
    params: Value,
) -> Result<T, BridgeError> {
    let value = bridge.invoke(command, params)?;
    serde_json::from_value(value).map_err(|e| BridgeError::Decode {
        command: command.to_string(),
        message: e.to_string(),
    })
}

/// In-process bridge that calls the command handler directly.
#[derive(Clone)]
pub struct LocalBridge {
    app: Arc<Mutex<App>>,
}

impl LocalBridge {
    pub fn new(app: App) -> Self {
        Self { app: Arc::new(Mutex::new(app)) }
    }

    pub fn from_shared(app: Arc<Mutex<App>>) -> Self {
        Self { app }
    }

    pub fn app(&self) -> &Arc<Mutex<App>> {
        &self.app
    }
}

impl CommandBridge for LocalBridge {
    fn invoke(&self, command: &str, params: Value) -> Result<Value, BridgeError> {
        handle_method(&self.app, command, &params).map_err(|message| BridgeError::Command {
            command: command.to_string(),
            message,
        })
    }
}
