use serde_json::Value;

use crate::{
    foundation::{
        error::ScaleResult,
        metrics::{MetricsSource, ScreenMetrics},
    },
    scale::config::{ArrayMode, NestedMode, ScalerConfig},
    style::value::{StyleMap, StyleValue, style_map_from_json, style_map_to_json},
};

/// Rescales style maps proportionally to a fixed screen.
///
/// Numbers are scaled by `screen height / baseline height` and floored; `vw`/`vh`
/// strings resolve against the screen width/height. A scaler holds no mutable state, so
/// every method is a pure function of its arguments and the captured metrics.
///
/// Scaling is not idempotent: feeding the output of [`StyleScaler::create`] back in
/// scales numeric fields a second time.
#[derive(Clone, Debug)]
pub struct StyleScaler {
    metrics: ScreenMetrics,
    config: ScalerConfig,
    factor: f64,
}

impl StyleScaler {
    /// Scaler with the default configuration.
    pub fn new(metrics: ScreenMetrics) -> Self {
        Self::build(metrics, ScalerConfig::default())
    }

    /// Scaler with an explicit configuration.
    pub fn with_config(metrics: ScreenMetrics, config: ScalerConfig) -> ScaleResult<Self> {
        config.validate()?;
        Ok(Self::build(metrics, config))
    }

    /// Query `source` once and build a scaler from the reported metrics.
    pub fn from_source<S: MetricsSource + ?Sized>(
        source: &S,
        config: ScalerConfig,
    ) -> ScaleResult<Self> {
        let metrics = source.window_metrics()?;
        tracing::debug!(
            width = metrics.width(),
            height = metrics.height(),
            "captured screen metrics"
        );
        Self::with_config(metrics, config)
    }

    fn build(metrics: ScreenMetrics, config: ScalerConfig) -> Self {
        let factor = metrics.height() / config.baseline_height;
        Self {
            metrics,
            config,
            factor,
        }
    }

    /// Captured screen metrics.
    pub fn metrics(&self) -> ScreenMetrics {
        self.metrics
    }

    /// Active configuration.
    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    /// `screen height / baseline height`.
    pub fn scale_factor(&self) -> f64 {
        self.factor
    }

    /// `floor(height / baseline * value)`.
    pub fn scale(&self, value: f64) -> f64 {
        (self.factor * value).floor()
    }

    /// Produce a scaled copy of `styles` with the same keys.
    #[tracing::instrument(level = "debug", skip_all, fields(entries = styles.len()))]
    pub fn create(&self, styles: &StyleMap) -> StyleMap {
        styles
            .iter()
            .map(|(key, value)| (key.clone(), self.scale_entry(key, value)))
            .collect()
    }

    /// [`StyleScaler::create`] over a JSON document. Fails only if the top level is not
    /// an object.
    pub fn create_json(&self, doc: Value) -> ScaleResult<Value> {
        let styles = style_map_from_json(doc)?;
        Ok(style_map_to_json(&self.create(&styles)))
    }

    /// Full screen width.
    pub fn screen_width(&self) -> f64 {
        self.screen_width_pct(100.0)
    }

    /// `percentage` percent of the screen width.
    pub fn screen_width_pct(&self, percentage: f64) -> f64 {
        self.metrics.width() * (percentage / 100.0)
    }

    /// Full screen height.
    pub fn screen_height(&self) -> f64 {
        self.screen_height_pct(100.0)
    }

    /// `percentage` percent of the screen height.
    pub fn screen_height_pct(&self, percentage: f64) -> f64 {
        self.metrics.height() * (percentage / 100.0)
    }

    fn scale_entry(&self, key: &str, value: &StyleValue) -> StyleValue {
        if self.config.ignored_keys.contains(key) {
            return value.clone();
        }
        match value {
            StyleValue::Nested(map) => self.scale_nested(key, map),
            StyleValue::Array(items) => self.scale_array(items),
            StyleValue::Number(v) | StyleValue::NumericText { value: v, .. } => {
                StyleValue::Number(self.scale_number(key, *v))
            }
            other => self.viewport_or_default(other),
        }
    }

    fn scale_number(&self, key: &str, value: f64) -> f64 {
        let scaled = self.scale(value);
        if value > 0.0 && self.config.min_one_keys.contains(key) {
            return scaled.max(1.0);
        }
        scaled
    }

    fn scale_nested(&self, key: &str, map: &StyleMap) -> StyleValue {
        if map.get("ignored").is_some_and(StyleValue::is_truthy) {
            return map
                .get("value")
                .cloned()
                .unwrap_or(StyleValue::Passthrough(Value::Null));
        }
        match (self.config.nested, map.get("value")) {
            (NestedMode::Unwrap, Some(inner)) if is_value_wrapper(map) => {
                self.scale_entry(key, inner)
            }
            _ => StyleValue::Nested(self.create(map)),
        }
    }

    fn scale_array(&self, items: &[StyleValue]) -> StyleValue {
        if self.config.arrays == ArrayMode::Preserve {
            return StyleValue::Array(items.to_vec());
        }
        StyleValue::Array(
            items
                .iter()
                .map(|item| match item.as_number() {
                    Some(v) => StyleValue::Number(self.scale(v)),
                    None => self.viewport_or_default(item),
                })
                .collect(),
        )
    }

    fn viewport_or_default(&self, value: &StyleValue) -> StyleValue {
        match value {
            StyleValue::Viewport { length, .. } => {
                StyleValue::Number(length.resolve(&self.metrics))
            }
            StyleValue::Text(raw) if raw.ends_with("vw") || raw.ends_with("vh") => {
                tracing::trace!(value = %raw, "malformed viewport length left unscaled");
                value.clone()
            }
            other => other.clone(),
        }
    }
}

/// `{ value }` or `{ ignored, value }` and nothing else.
fn is_value_wrapper(map: &StyleMap) -> bool {
    map.keys().all(|k| k == "ignored" || k == "value")
}

#[cfg(test)]
#[path = "../../tests/unit/scale/scaler.rs"]
mod tests;
