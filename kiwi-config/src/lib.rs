// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! The `.kiwirc.ts` project configuration.
//!
//! [`Config`] is loaded once at the start of a command, mutated in memory by a
//! generator and written back wholesale with [`Config::save`].

mod error;
mod file;
mod literal;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use error::{Error, Result};
pub use file::{CONFIG_FILE, config_path};
pub use literal::{parse_literal, to_literal};

/// Client entry the framework falls back to when none is configured.
pub const DEFAULT_CLIENT_ENTRY: &str = "src/.kiwi/client.tsx";

/// Framework settings read from `.kiwirc.ts`.
///
/// Keys this crate does not know about are kept in `extra`, in file order,
/// so a round trip never drops user settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Entry module of the client bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_entry: Option<String>,

    /// Whether tailwindcss support is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailwindcss: Option<bool>,

    /// Every other setting
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Config {
    /// Build a config from an already parsed object.
    pub fn from_map(map: Map<String, Value>) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(map))
    }

    /// Flatten back into a single object, known fields first.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Copy of this config with `clientEntry` forced to the framework default.
    pub fn normalized(&self) -> Self {
        Self {
            client_entry: Some(DEFAULT_CLIENT_ENTRY.to_string()),
            ..self.clone()
        }
    }

    /// Whether tailwindcss is switched on
    pub fn tailwind_enabled(&self) -> bool {
        self.tailwindcss.unwrap_or(false)
    }
}
