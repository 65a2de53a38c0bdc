use std::path::Path;

use serde::Deserialize;

use crate::error::MaryError;

/// Runtime settings, read from the `[runtime]` table of a `mary.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Emit a JSON line on stderr for every saturated builtin call.
    pub trace: bool,
    /// Include rendered arguments and results in trace events.
    pub trace_args: bool,
    /// Include call duration (`durMs`) in exit events.
    pub trace_time: bool,
    /// Elements rendered per list/tuple before a trace value is summarised.
    pub show_max_items: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            trace: false,
            trace_args: false,
            trace_time: false,
            show_max_items: default_show_max_items(),
        }
    }
}

fn default_show_max_items() -> usize {
    20
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MaryToml {
    #[serde(default)]
    runtime: RuntimeConfig,
}

impl RuntimeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, MaryError> {
        toml::from_str::<MaryToml>(text)
            .map(|doc| doc.runtime)
            .map_err(|err| MaryError::Config(format!("failed to parse runtime config: {err}")))
    }

    pub fn load(path: &Path) -> Result<Self, MaryError> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str::<MaryToml>(&text)
            .map(|doc| doc.runtime)
            .map_err(|err| MaryError::Config(format!("failed to parse {}: {err}", path.display())))
    }

    /// Applies `MARY_TRACE`, `MARY_TRACE_ARGS` and `MARY_TRACE_TIME`
    /// from the process environment.
    pub fn from_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = |key: &str| lookup(key).is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
        if enabled("MARY_TRACE") {
            self.trace = true;
        }
        if enabled("MARY_TRACE_ARGS") {
            self.trace_args = true;
        }
        if enabled("MARY_TRACE_TIME") {
            self.trace_time = true;
        }
        self
    }
}
