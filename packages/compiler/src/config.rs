//! Code generation options
//!
//! Names baked into the generated handler text. Both default to the names the
//! rendering runtime expects, so most callers never touch them.

use crate::chars;
use crate::error::{CodegenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_EVENT_PARAM: &str = "$event";
pub const DEFAULT_KEY_RESOLVER: &str = "_k";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodegenOptions {
    /// Parameter name of generated functions, also used by every guard
    pub event_param: String,
    /// Runtime function resolving custom key aliases to key codes
    pub key_resolver: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        CodegenOptions {
            event_param: DEFAULT_EVENT_PARAM.to_string(),
            key_resolver: DEFAULT_KEY_RESOLVER.to_string(),
        }
    }
}

impl CodegenOptions {
    pub fn new(event_param: impl Into<String>, key_resolver: impl Into<String>) -> Result<Self> {
        let options = CodegenOptions {
            event_param: event_param.into(),
            key_resolver: key_resolver.into(),
        };
        options.validate()?;
        Ok(options)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let options: CodegenOptions = serde_json::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CodegenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), ?options, "loaded codegen options");
        Ok(options)
    }

    /// Both names are spliced into generated code unquoted
    pub fn validate(&self) -> Result<()> {
        if !chars::is_identifier(&self.event_param) {
            return Err(CodegenError::InvalidOption {
                option: "eventParam",
                value: self.event_param.clone(),
            });
        }
        if !chars::is_identifier(&self.key_resolver) {
            return Err(CodegenError::InvalidOption {
                option: "keyResolver",
                value: self.key_resolver.clone(),
            });
        }
        Ok(())
    }
}
