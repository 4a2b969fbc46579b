use crate::foundation::metrics::ScreenMetrics;

/// Screen axis a viewport length is relative to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ViewportUnit {
    /// Percent of the screen width (`"50vw"`).
    Vw,
    /// Percent of the screen height (`"50vh"`).
    Vh,
}

impl ViewportUnit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "vw" => Some(Self::Vw),
            "vh" => Some(Self::Vh),
            _ => None,
        }
    }
}

/// A CSS-style viewport length such as `"50vw"` or `"12.5vh"`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportLength {
    /// Percentage of the referenced screen axis.
    pub amount: f64,
    /// Referenced screen axis.
    pub unit: ViewportUnit,
}

impl ViewportLength {
    /// Parse `<number>vw` / `<number>vh`.
    ///
    /// The string must be longer than the two-character suffix and the prefix must be a
    /// finite decimal number; anything else is not a viewport length.
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() <= 2 {
            return None;
        }
        let split = s.char_indices().rev().nth(1).map(|(i, _)| i)?;
        let (prefix, suffix) = s.split_at(split);
        let unit = ViewportUnit::from_suffix(suffix)?;
        let amount = parse_decimal(prefix)?;
        Some(Self { amount, unit })
    }

    /// Absolute size on the given screen. Not floored.
    pub fn resolve(self, metrics: &ScreenMetrics) -> f64 {
        let axis = match self.unit {
            ViewportUnit::Vw => metrics.width(),
            ViewportUnit::Vh => metrics.height(),
        };
        self.amount / 100.0 * axis
    }
}

/// Lenient decimal parse shared by viewport prefixes and numeric style strings.
///
/// Surrounding whitespace is ignored; blank input, `inf`/`NaN` spellings and anything
/// that is not a plain decimal literal yield `None`.
pub(crate) fn parse_decimal(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() || !t.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/style/viewport.rs"]
mod tests;
