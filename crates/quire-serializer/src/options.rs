//! Serializer configuration.

use serde::Deserialize;

/// Options recognized by the serializer.
///
/// Front ends typically load these from JSON with camelCase keys; missing
/// keys keep their defaults (everything off).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SerializeOptions {
    /// Omit debug tables and clear every function's debug flag.
    pub strip_debug_info_section: bool,
    /// Deduplicate identical function bodies.
    pub optimization_enabled: bool,
    /// Append this percentage of each written body's size as zero padding.
    pub pad_function_bodies_percent: u32,
}

impl SerializeOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn strip_debug_info(mut self, strip: bool) -> Self {
        self.strip_debug_info_section = strip;
        self
    }

    pub fn optimize(mut self, enabled: bool) -> Self {
        self.optimization_enabled = enabled;
        self
    }

    pub fn pad_function_bodies(mut self, percent: u32) -> Self {
        self.pad_function_bodies_percent = percent;
        self
    }
}
