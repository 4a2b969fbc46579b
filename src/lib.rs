//! scalesheet rescales mobile UI style sheets to the device screen.
//!
//! Style sheets are authored against a reference phone whose screen is
//! [`BASELINE_HEIGHT`] units tall. [`StyleScaler::create`] turns such a sheet into one for
//! the actual screen:
//!
//! - numbers (and numeric strings) are multiplied by `screen height / baseline height`
//!   and floored,
//! - `"<n>vw"` / `"<n>vh"` strings become `n` percent of the screen width / height,
//! - a fixed set of keys (`flex`, `fontWeight`, `elevation`) is copied verbatim,
//! - `borderWidth` never drops below 1 when the authored width is positive,
//! - everything else (colors, keywords, booleans) passes through unchanged.
//!
//! Screen metrics are captured once and never re-read; a scaler is an immutable value, so
//! several screen sizes can be exercised side by side.
//!
//! ```
//! use scalesheet::{ScreenMetrics, StyleScaler};
//! use serde_json::json;
//!
//! let scaler = StyleScaler::new(ScreenMetrics::new(360.0, 1360.0)?);
//! let out = scaler.create_json(json!({"padding": 8, "width": "50vw", "flex": 1}))?;
//! assert_eq!(out, json!({"padding": 16, "width": 180, "flex": 1}));
//! # Ok::<(), scalesheet::ScaleError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod scale;
mod style;

pub use foundation::error::{ScaleError, ScaleResult};
pub use foundation::metrics::{BASELINE_HEIGHT, MetricsSource, ScreenMetrics};
pub use scale::config::{ArrayMode, NestedMode, ScalerConfig};
pub use scale::scaler::StyleScaler;
pub use style::value::{StyleMap, StyleValue, style_map_from_json, style_map_to_json};
pub use style::viewport::{ViewportLength, ViewportUnit};
