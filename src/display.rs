//! Render model for the nutrition progress bar.
//!
//! Everything here is a pure function of the widget's inputs, so the
//! component only has to turn a [`BarView`] into markup.

use serde::Deserialize;

use crate::error::ReadingError;
use crate::percentage::percentage;

/// Right-hand header text shown when the reading cannot be displayed.
pub const NO_DATA_TEXT: &str = "정보 없음";
/// Footer text shown when the reading cannot be displayed.
pub const PLACEHOLDER_TEXT: &str = "-";
/// Fill color used when there is nothing to measure.
pub const INACTIVE_FILL_CLASS: &str = "bg-gray-300";

/// Inclusive percentage band treated as "close enough" to the target.
pub const NEAR_TARGET_BAND: (f64, f64) = (90.0, 110.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ColorName {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
    Orange,
}

impl ColorName {
    pub fn fill_class(self) -> &'static str {
        match self {
            ColorName::Blue => "bg-blue-500",
            ColorName::Green => "bg-green-500",
            ColorName::Red => "bg-red-500",
            ColorName::Yellow => "bg-yellow-500",
            ColorName::Purple => "bg-purple-500",
            ColorName::Orange => "bg-orange-500",
        }
    }
}

// Unknown names fall back to blue
impl From<&str> for ColorName {
    fn from(name: &str) -> Self {
        match name {
            "green" => ColorName::Green,
            "red" => ColorName::Red,
            "yellow" => ColorName::Yellow,
            "purple" => ColorName::Purple,
            "orange" => ColorName::Orange,
            _ => ColorName::Blue,
        }
    }
}

impl From<String> for ColorName {
    fn from(name: String) -> Self {
        ColorName::from(name.as_str())
    }
}

/// Check that a single value is usable as a reading.
pub fn classify(value: Option<f64>) -> Result<f64, ReadingError> {
    match value {
        None => Err(ReadingError::Missing),
        Some(v) if !v.is_finite() => Err(ReadingError::NotFinite(v)),
        Some(v) => Ok(v),
    }
}

/// The two inputs, validated together once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    Valid { current: f64, target: f64 },
    Invalid,
}

impl Reading {
    pub fn new(current: Option<f64>, target: Option<f64>) -> Self {
        match (classify(current), classify(target)) {
            (Ok(current), Ok(target)) => Reading::Valid { current, target },
            _ => Reading::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Reading::Valid { .. })
    }

    pub fn measure(&self) -> Option<Measurement> {
        match *self {
            Reading::Valid { current, target } => Some(Measurement::new(current, target)),
            Reading::Invalid => None,
        }
    }
}

/// Derived values of a valid reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub current: f64,
    pub target: f64,
    pub percentage: f64,
    pub exceeded: bool,
    pub near_target: bool,
}

impl Measurement {
    pub fn new(current: f64, target: f64) -> Self {
        let percentage = percentage(current, target);
        let (low, high) = NEAR_TARGET_BAND;
        Self {
            current,
            target,
            percentage,
            exceeded: current > target,
            near_target: percentage >= low && percentage <= high,
        }
    }

    /// Bar width in percent; never overflows the container.
    pub fn fill_width(&self) -> f64 {
        self.percentage.min(100.0)
    }
}

/// One step of the bar color decision. Earlier rules win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRule {
    Exceeded,
    NearTarget,
    Chosen,
}

pub const COLOR_RULES: [ColorRule; 3] = [
    ColorRule::Exceeded,
    ColorRule::NearTarget,
    ColorRule::Chosen,
];

impl ColorRule {
    fn apply(self, measurement: &Measurement, chosen: ColorName) -> Option<ColorName> {
        match self {
            ColorRule::Exceeded => measurement.exceeded.then_some(ColorName::Red),
            ColorRule::NearTarget => measurement.near_target.then_some(ColorName::Green),
            ColorRule::Chosen => Some(chosen),
        }
    }
}

pub fn bar_color(measurement: &Measurement, chosen: ColorName) -> ColorName {
    COLOR_RULES
        .iter()
        .find_map(|rule| rule.apply(measurement, chosen))
        .unwrap_or(chosen)
}

/// Everything needed to draw the bar, minus the label.
#[derive(Debug, Clone, PartialEq)]
pub enum BarView {
    NoData,
    Measured {
        measurement: Measurement,
        unit: String,
        color: ColorName,
    },
}

impl BarView {
    pub fn derive(current: Option<f64>, target: Option<f64>, unit: &str, chosen: ColorName) -> Self {
        match Reading::new(current, target).measure() {
            Some(measurement) => BarView::Measured {
                color: bar_color(&measurement, chosen),
                measurement,
                unit: unit.to_string(),
            },
            None => BarView::NoData,
        }
    }

    pub fn status_text(&self) -> String {
        match self {
            BarView::NoData => NO_DATA_TEXT.to_string(),
            BarView::Measured { measurement, unit, .. } => format!(
                "{}{} / {}{}",
                whole_number(measurement.current),
                unit,
                whole_number(measurement.target),
                unit
            ),
        }
    }

    pub fn status_class(&self) -> &'static str {
        match self {
            BarView::NoData => "text-sm text-gray-400",
            BarView::Measured { .. } => "text-sm text-gray-500",
        }
    }

    pub fn fill_width(&self) -> f64 {
        match self {
            BarView::NoData => 0.0,
            BarView::Measured { measurement, .. } => measurement.fill_width(),
        }
    }

    pub fn fill_class(&self) -> &'static str {
        match self {
            BarView::NoData => INACTIVE_FILL_CLASS,
            BarView::Measured { color, .. } => color.fill_class(),
        }
    }

    pub fn footer_text(&self) -> String {
        match self {
            BarView::NoData => PLACEHOLDER_TEXT.to_string(),
            BarView::Measured { measurement, .. } => {
                format!("{}%", whole_number(measurement.percentage))
            }
        }
    }

    pub fn footer_class(&self) -> &'static str {
        match self {
            BarView::NoData => "text-xs text-gray-400 mt-1 text-right",
            BarView::Measured { .. } => "text-xs text-gray-500 mt-1 text-right",
        }
    }
}

/// Round half away from zero and print without a fraction. `-0` prints as `0`.
fn whole_number(value: f64) -> String {
    format!("{}", value.round() + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(current: f64, target: f64, color: ColorName) -> BarView {
        BarView::derive(Some(current), Some(target), "kcal", color)
    }

    #[test]
    fn test_below_target_uses_chosen_color() {
        let bar = view(1200.0, 2000.0, ColorName::default());
        assert_eq!(bar.footer_text(), "60%");
        assert_eq!(bar.status_text(), "1200kcal / 2000kcal");
        assert_eq!(bar.fill_width(), 60.0);
        assert_eq!(bar.fill_class(), "bg-blue-500");
    }

    #[test]
    fn test_near_target_is_green() {
        let bar = view(1850.0, 2000.0, ColorName::Purple);
        assert_eq!(bar.footer_text(), "93%");
        assert_eq!(bar.fill_width(), 93.0);
        assert_eq!(bar.fill_class(), "bg-green-500");
    }

    #[test]
    fn test_exceeded_is_red_and_capped() {
        let bar = view(2500.0, 2000.0, ColorName::Yellow);
        assert_eq!(bar.footer_text(), "125%");
        assert_eq!(bar.fill_width(), 100.0);
        assert_eq!(bar.fill_class(), "bg-red-500");
    }

    #[test]
    fn test_exceeded_wins_over_near_target() {
        // 105% is inside the band but still over the target
        let bar = view(2100.0, 2000.0, ColorName::Blue);
        assert_eq!(bar.fill_class(), "bg-red-500");
    }

    #[test]
    fn test_exact_target_is_green() {
        let bar = view(2000.0, 2000.0, ColorName::Orange);
        assert_eq!(bar.fill_class(), "bg-green-500");
        assert_eq!(bar.fill_width(), 100.0);
    }

    #[test]
    fn test_band_edges() {
        // 89.6 rounds to 90 and counts as near target
        assert_eq!(view(896.0, 1000.0, ColorName::Blue).fill_class(), "bg-green-500");
        assert_eq!(view(894.0, 1000.0, ColorName::Blue).fill_class(), "bg-blue-500");
        assert_eq!(view(1100.0, 1000.0, ColorName::Blue).fill_class(), "bg-red-500");
    }

    #[test]
    fn test_missing_current_is_no_data() {
        let bar = BarView::derive(None, Some(2000.0), "kcal", ColorName::Red);
        assert_eq!(bar, BarView::NoData);
        assert_eq!(bar.status_text(), NO_DATA_TEXT);
        assert_eq!(bar.footer_text(), "-");
        assert_eq!(bar.fill_width(), 0.0);
        assert_eq!(bar.fill_class(), INACTIVE_FILL_CLASS);
    }

    #[test]
    fn test_any_invalid_input_is_no_data() {
        let cases = [
            (Some(100.0), None),
            (None, None),
            (Some(f64::NAN), Some(2000.0)),
            (Some(100.0), Some(f64::INFINITY)),
        ];
        for (current, target) in cases {
            assert_eq!(BarView::derive(current, target, "", ColorName::Blue), BarView::NoData);
        }
    }

    #[test]
    fn test_zero_target() {
        let bar = view(100.0, 0.0, ColorName::Green);
        assert_eq!(bar.footer_text(), "0%");
        assert_eq!(bar.fill_width(), 0.0);
        assert_eq!(bar.fill_class(), "bg-red-500");
        assert_eq!(bar.status_text(), "100kcal / 0kcal");
    }

    #[test]
    fn test_amounts_are_rounded() {
        let bar = BarView::derive(Some(12.5), Some(49.6), "g", ColorName::Blue);
        assert_eq!(bar.status_text(), "13g / 50g");
        assert_eq!(bar.footer_text(), "25%");
    }

    #[test]
    fn test_empty_unit() {
        let bar = BarView::derive(Some(3.0), Some(8.0), "", ColorName::Blue);
        assert_eq!(bar.status_text(), "3 / 8");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        let bar = BarView::derive(Some(-0.2), Some(10.0), "g", ColorName::Blue);
        assert_eq!(bar.status_text(), "0g / 10g");
        assert_eq!(bar.footer_text(), "0%");
    }

    #[test]
    fn test_same_inputs_same_view() {
        let first = view(640.0, 2000.0, ColorName::Orange);
        let second = view(640.0, 2000.0, ColorName::Orange);
        assert_eq!(first, second);
        assert_eq!(first.status_text(), second.status_text());
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(
            COLOR_RULES,
            [ColorRule::Exceeded, ColorRule::NearTarget, ColorRule::Chosen]
        );

        let exceeded = Measurement::new(300.0, 200.0);
        let near = Measurement::new(190.0, 200.0);
        let far = Measurement::new(20.0, 200.0);
        for chosen in [ColorName::Blue, ColorName::Green, ColorName::Yellow] {
            assert_eq!(bar_color(&exceeded, chosen), ColorName::Red);
            assert_eq!(bar_color(&near, chosen), ColorName::Green);
            assert_eq!(bar_color(&far, chosen), chosen);
        }
    }

    #[test]
    fn test_color_names() {
        assert_eq!(ColorName::from("purple"), ColorName::Purple);
        assert_eq!(ColorName::from("orange").fill_class(), "bg-orange-500");
        assert_eq!(ColorName::from("teal"), ColorName::Blue);
        assert_eq!(ColorName::from(""), ColorName::Blue);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(Some(4.0)), Ok(4.0));
        assert_eq!(classify(None), Err(ReadingError::Missing));
        assert!(matches!(classify(Some(f64::NAN)), Err(ReadingError::NotFinite(_))));
        assert!(!Reading::new(Some(1.0), None).is_valid());
        assert!(Reading::new(Some(1.0), Some(0.0)).is_valid());
    }
}
