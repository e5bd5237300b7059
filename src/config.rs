//! Configuration surface: the single `ssl_preread on|off` directive.
//!
//! Grounded on `huginn-proxy-lib`'s `config/tls.rs` / `config/fingerprinting.rs`
//! (`serde`-derived struct, `#[serde(default = ...)]` fields) for shape, and
//! `config/loader.rs` for [`load_from_path`]. `merge` implements nginx's
//! `ngx_conf_merge_value` rule: a child scope's unset directive inherits the
//! parent's; an explicitly set child directive always wins.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PrereadError, Result};

/// `ssl_preread on|off`, directive-scoped (main or server block). The raw
/// `Option<bool>` tracks "unset" separately from "set to false" so
/// [`PrereadConfig::merge`] can tell the two apart the way nginx's
/// `NGX_CONF_UNSET` sentinel does.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PrereadConfig {
    #[serde(default)]
    enabled: Option<bool>,
}

impl PrereadConfig {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
        }
    }

    /// Unset: inherits whatever the parent scope resolves to.
    pub fn unset() -> Self {
        Self { enabled: None }
    }

    /// Whether preread is active in this scope, defaulting to `false` when
    /// neither this scope nor any ancestor ever set it, nginx's directive
    /// default for `ssl_preread`.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Merges `self` (the child scope) over `parent`: the parent's value
    /// applies only where the child left the directive unset.
    pub fn merge(&self, parent: &Self) -> Self {
        Self {
            enabled: self.enabled.or(parent.enabled),
        }
    }
}

/// Top-level config file shape for the standalone/CLI entry point. Real
/// embeddings (a stream-proxying host) are expected to carry their own
/// server-scope hierarchy and call [`PrereadConfig::merge`] themselves;
/// this is a flat single-scope convenience for `preread-inspect` and tests.
#[derive(Debug, Deserialize, Clone)]
pub struct RootConfig {
    #[serde(default)]
    pub ssl_preread: PrereadConfig,
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<RootConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| PrereadError::Config(format!("failed to read config file: {e}")))?;
    let cfg: RootConfig = toml::from_str(&text)
        .map_err(|e| PrereadError::Config(format!("failed to parse config: {e}")))?;
    Ok(cfg)
}
