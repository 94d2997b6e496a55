//! Navigator configuration

use serde::{Deserialize, Serialize};

use wayfinder_link::LinkParser;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Accepted URL schemes (case-insensitive); empty accepts any
    pub allowed_schemes: Vec<String>,
    /// Percent-decode route tokens
    pub decode_segments: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            allowed_schemes: Vec::new(),
            decode_segments: true,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Schemes must follow URL scheme syntax: a letter, then letters,
    /// digits, `+`, `-` or `.`
    pub fn validate(&self) -> Result<()> {
        for scheme in &self.allowed_schemes {
            let mut chars = scheme.chars();
            let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
            if !valid {
                return Err(CoreError::Config(format!("invalid scheme: {:?}", scheme)));
            }
        }
        Ok(())
    }

    pub fn link_parser(&self) -> LinkParser {
        LinkParser::new()
            .with_allowed_schemes(&self.allowed_schemes)
            .with_decode_segments(self.decode_segments)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
