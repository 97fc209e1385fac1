//! Password generator for GlassDesk.
//!
//! Builds an alphabet from the requested character classes and picks every
//! position independently and uniformly from it. Letters (both cases) are
//! always present in the alphabet; digits and symbols are optional. No class
//! is forced to appear in the output.

use ring::rand::{SecureRandom, SystemRandom};
use zeroize::Zeroizing;

use crate::types::credential::PasswordGenOptions;
use crate::types::errors::GeneratorError;
use crate::types::settings::GeneratorSettings;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?";

/// Source of random bytes for the generator.
///
/// Implementations must be usable from several threads at once; the
/// generator itself keeps no mutable state.
pub trait RandomSource: Send + Sync {
    fn fill(&self, dest: &mut [u8]) -> Result<(), GeneratorError>;
}

/// Operating-system CSPRNG via `ring`.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    pub fn new() -> Self {
        Self { rng: SystemRandom::new() }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    fn fill(&self, dest: &mut [u8]) -> Result<(), GeneratorError> {
        self.rng
            .fill(dest)
            .map_err(|_| GeneratorError::RandomGeneration("system random source unavailable".to_string()))
    }
}

/// Trait defining password generation.
pub trait PasswordGeneratorTrait {
    fn generate(&self, options: &PasswordGenOptions) -> Result<String, GeneratorError>;
    fn settings(&self) -> &GeneratorSettings;
}

/// Random password generator with configurable length bounds.
pub struct PasswordGenerator<R: RandomSource = SystemRandomSource> {
    rng: R,
    settings: GeneratorSettings,
}

impl PasswordGenerator<SystemRandomSource> {
    pub fn new(settings: GeneratorSettings) -> Self {
        Self::with_source(SystemRandomSource::new(), settings)
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    pub fn with_source(rng: R, settings: GeneratorSettings) -> Self {
        Self { rng, settings }
    }

    pub fn set_settings(&mut self, settings: GeneratorSettings) {
        self.settings = settings;
    }

    /// Returns the characters a password with these options is drawn from.
    pub fn alphabet(options: &PasswordGenOptions) -> Vec<char> {
        let mut charset = String::with_capacity(88);
        charset.push_str(LOWERCASE);
        charset.push_str(UPPERCASE);
        if options.include_numbers {
            charset.push_str(DIGITS);
        }
        if options.include_symbols {
            charset.push_str(SYMBOLS);
        }
        charset.chars().collect()
    }

    /// Fills `out` with `length` uniformly chosen indices into an alphabet of
    /// `n` characters. Bytes at or above the largest multiple of `n` are
    /// rejected so every index is equally likely.
    fn sample_indices(&self, n: usize, length: usize) -> Result<Vec<usize>, GeneratorError> {
        let limit = 256 - (256 % n);
        let mut indices = Vec::with_capacity(length);
        let mut buf = Zeroizing::new(vec![0u8; length.max(16)]);

        while indices.len() < length {
            self.rng.fill(&mut buf)?;
            for &b in buf.iter() {
                if (b as usize) < limit {
                    indices.push(b as usize % n);
                    if indices.len() == length {
                        break;
                    }
                }
            }
        }
        Ok(indices)
    }
}

impl<R: RandomSource> PasswordGeneratorTrait for PasswordGenerator<R> {
    /// Generates a password. Non-positive lengths fail; other lengths are
    /// clamped into the configured range.
    fn generate(&self, options: &PasswordGenOptions) -> Result<String, GeneratorError> {
        if options.length <= 0 {
            return Err(GeneratorError::InvalidArgument(format!(
                "length must be positive, got {}",
                options.length
            )));
        }
        let length = self.settings.clamp_length(options.length) as usize;

        let chars = Self::alphabet(options);
        let indices = self.sample_indices(chars.len(), length)?;
        Ok(indices.into_iter().map(|i| chars[i]).collect())
    }

    fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }
}
