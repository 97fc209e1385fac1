//! Generator screen: length slider, class toggles and the last result.

use serde_json::json;

use super::bridge::{invoke_as, CommandBridge};
use super::Notification;
use crate::types::settings::GeneratorSettings;

#[derive(Debug)]
pub struct GeneratorView {
    length: i64,
    pub include_numbers: bool,
    pub include_symbols: bool,
    generated: Option<String>,
    bounds: GeneratorSettings,
}

impl GeneratorView {
    pub fn new(bounds: GeneratorSettings) -> Self {
        Self {
            length: bounds.default_length,
            include_numbers: true,
            include_symbols: true,
            generated: None,
            bounds,
        }
    }

    pub fn length(&self) -> i64 {
        self.length
    }

    /// Moves the slider; values outside the configured range are clamped.
    pub fn set_length(&mut self, length: i64) {
        self.length = self.bounds.clamp_length(length);
    }

    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    /// Text for the result box.
    pub fn display(&self) -> &str {
        self.generated.as_deref().unwrap_or("Generate...")
    }

    pub fn generate(&mut self, bridge: &dyn CommandBridge) -> Notification {
        let params = json!({
            "length": self.length,
            "hasNumbers": self.include_numbers,
            "hasSymbols": self.include_symbols,
        });
        match invoke_as::<String>(bridge, "generate_password", params) {
            Ok(password) => {
                self.generated = Some(password);
                Notification::info("Generated!")
            }
            Err(e) => Notification::error(e.to_string()),
        }
    }

    /// One-line description of the last result that leaves the password out.
    pub fn summary(&self) -> Option<String> {
        self.generated.as_ref().map(|p| {
            format!(
                "{} chars, numbers: {}, symbols: {}",
                p.chars().count(),
                self.include_numbers,
                self.include_symbols
            )
        })
    }

    /// Returns the text to place on the clipboard, if anything was generated.
    pub fn copy(&self) -> Option<(String, Notification)> {
        self.generated
            .clone()
            .map(|p| (p, Notification::success("Copied!")))
    }
}
