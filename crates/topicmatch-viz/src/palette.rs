//! Sequential colour scales (CARTO) used by the charts.

use serde::{Serialize, Serializer};

/// Evenly spaced colour stops, serialized as `[[0.0, "#..."], ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

const REDOR: &[&str] = &[
    "#f6d2a9", "#f5b78e", "#f19c7c", "#ea8171", "#dd686c", "#ca5268", "#b13f64",
];
const PINKYL: &[&str] = &[
    "#fef6b5", "#ffdd9a", "#ffc285", "#ffa679", "#fa8a76", "#f16d7a", "#e15383",
];
const ORYEL: &[&str] = &[
    "#ecda9a", "#efc47e", "#f3ad6a", "#f7945d", "#f97b57", "#f66356", "#ee4d5a",
];

impl ColorScale {
    pub fn redor() -> Self {
        Self { name: "Redor", colors: REDOR }
    }

    pub fn pinkyl() -> Self {
        Self { name: "Pinkyl", colors: PINKYL }
    }

    pub fn oryel() -> Self {
        Self { name: "Oryel", colors: ORYEL }
    }

    /// Look a scale up by name, case-insensitively.
    pub fn named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "redor" => Some(Self::redor()),
            "pinkyl" => Some(Self::pinkyl()),
            "oryel" => Some(Self::oryel()),
            _ => None,
        }
    }

    /// Scales cycled across the dashboard's topic traces.
    pub fn dashboard_cycle() -> [ColorScale; 3] {
        [Self::redor(), Self::pinkyl(), Self::oryel()]
    }

    /// `(position, colour)` stops from 0.0 to 1.0.
    pub fn stops(&self) -> Vec<(f64, &'static str)> {
        let last = self.colors.len().saturating_sub(1).max(1) as f64;
        self.colors
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f64 / last, c))
            .collect()
    }

    /// The darkest colour, used where a single colour is needed.
    pub fn strongest(&self) -> &'static str {
        self.colors.last().copied().unwrap_or("#000000")
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.stops().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_span_zero_to_one() {
        let stops = ColorScale::redor().stops();
        assert_eq!(stops.len(), 7);
        assert_eq!(stops[0], (0.0, "#f6d2a9"));
        assert_eq!(stops[6].0, 1.0);
    }

    #[test]
    fn serializes_as_pairs() {
        let json = serde_json::to_value(ColorScale::oryel()).unwrap();
        assert_eq!(json[0][1], "#ecda9a");
        assert_eq!(json[6][0], 1.0);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(ColorScale::named("PinkYl"), Some(ColorScale::pinkyl()));
        assert!(ColorScale::named("viridis").is_none());
    }
}
