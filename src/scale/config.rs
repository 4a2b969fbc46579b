use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::foundation::{
    error::{ScaleError, ScaleResult},
    metrics::BASELINE_HEIGHT,
};

/// How array values (e.g. `transform` lists) are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayMode {
    /// Store the element-wise scaled array.
    #[default]
    Scale,
    /// Legacy: compute the scaled array but store the input unchanged.
    Preserve,
}

/// How nested objects are treated when their `ignored` flag is falsy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NestedMode {
    /// Pure `{ ignored, value }` wrappers scale their inner value under the outer key; any
    /// other object is scaled as a nested style, all of its keys kept.
    #[default]
    Unwrap,
    /// Legacy: scale the wrapper object itself, `ignored` flag included.
    Recurse,
}

/// Tunables of a [`crate::StyleScaler`]. Every field has a default, so partial JSON works.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScalerConfig {
    /// Reference height the screen height is divided by.
    pub baseline_height: f64,
    /// Attribute names copied through without scaling.
    pub ignored_keys: BTreeSet<String>,
    /// Attribute names whose positive values never scale below 1 (keeps hairlines visible).
    pub min_one_keys: BTreeSet<String>,
    /// Array handling.
    pub arrays: ArrayMode,
    /// Nested object handling.
    pub nested: NestedMode,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            baseline_height: BASELINE_HEIGHT,
            ignored_keys: ["flex", "fontWeight", "elevation"]
                .into_iter()
                .map(String::from)
                .collect(),
            min_one_keys: BTreeSet::from(["borderWidth".to_string()]),
            arrays: ArrayMode::default(),
            nested: NestedMode::default(),
        }
    }
}

impl ScalerConfig {
    /// Bit-for-bit behaviour of the deployed scaler: arrays are stored unscaled and
    /// nested wrappers are scaled as a whole.
    pub fn legacy() -> Self {
        Self {
            arrays: ArrayMode::Preserve,
            nested: NestedMode::Recurse,
            ..Self::default()
        }
    }

    /// Check invariants not expressible in the type.
    pub fn validate(&self) -> ScaleResult<()> {
        if !self.baseline_height.is_finite() || self.baseline_height <= 0.0 {
            return Err(ScaleError::config(format!(
                "baseline_height must be finite and > 0, got {}",
                self.baseline_height
            )));
        }
        if let Some(k) = self.ignored_keys.intersection(&self.min_one_keys).next() {
            return Err(ScaleError::config(format!(
                "key '{k}' cannot be both ignored and clamped"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> ScaleResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: &Path) -> ScaleResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/config.rs"]
mod tests;
