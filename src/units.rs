// 📏 Unit Converter - Conversion tables as data
// Linear categories scale through a base unit; temperature is affine and special-cased

use crate::error::{ToolError, ToolResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// UNIT TABLES
// ============================================================================

/// A unit inside a category, scaled relative to the category's base unit (factor 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub key: &'static str,
    pub name: &'static str,
    pub factor: f64,
}

const fn unit(key: &'static str, name: &'static str, factor: f64) -> Unit {
    Unit { key, name, factor }
}

const LENGTH_UNITS: &[Unit] = &[
    unit("meter", "Meter", 1.0),
    unit("kilometer", "Kilometer", 1000.0),
    unit("centimeter", "Centimeter", 0.01),
    unit("millimeter", "Millimeter", 0.001),
    unit("inch", "Inch", 0.0254),
    unit("foot", "Foot", 0.3048),
    unit("yard", "Yard", 0.9144),
    unit("mile", "Mile", 1609.34),
];

const WEIGHT_UNITS: &[Unit] = &[
    unit("kilogram", "Kilogram", 1.0),
    unit("gram", "Gram", 0.001),
    unit("pound", "Pound", 0.453592),
    unit("ounce", "Ounce", 0.0283495),
    unit("ton", "Ton", 1000.0),
    unit("stone", "Stone", 6.35029),
];

// Factors are unused for temperature; see `convert_temperature`
const TEMPERATURE_UNITS: &[Unit] = &[
    unit("celsius", "Celsius", 1.0),
    unit("fahrenheit", "Fahrenheit", 1.0),
    unit("kelvin", "Kelvin", 1.0),
];

const VOLUME_UNITS: &[Unit] = &[
    unit("liter", "Liter", 1.0),
    unit("milliliter", "Milliliter", 0.001),
    unit("gallon", "Gallon (US)", 3.78541),
    unit("quart", "Quart", 0.946353),
    unit("pint", "Pint", 0.473176),
    unit("cup", "Cup", 0.236588),
    unit("fluidounce", "Fluid Ounce", 0.0295735),
];

const AREA_UNITS: &[Unit] = &[
    unit("squaremeter", "Square Meter", 1.0),
    unit("squarekilometer", "Square Kilometer", 1_000_000.0),
    unit("squarecentimeter", "Square Centimeter", 0.0001),
    unit("squareinch", "Square Inch", 0.00064516),
    unit("squarefoot", "Square Foot", 0.092903),
    unit("acre", "Acre", 4046.86),
    unit("hectare", "Hectare", 10000.0),
];

// ============================================================================
// CATEGORY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Area,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Area,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Area => "area",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Area => "Area",
        }
    }

    pub fn units(&self) -> &'static [Unit] {
        match self {
            Category::Length => LENGTH_UNITS,
            Category::Weight => WEIGHT_UNITS,
            Category::Temperature => TEMPERATURE_UNITS,
            Category::Volume => VOLUME_UNITS,
            Category::Area => AREA_UNITS,
        }
    }

    pub fn unit(&self, key: &str) -> Option<&'static Unit> {
        self.units().iter().find(|u| u.key == key)
    }

    /// Like `unit`, but reports which lookup failed
    pub fn require_unit(&self, key: &str) -> ToolResult<&'static Unit> {
        self.unit(key).ok_or_else(|| ToolError::UnknownUnit {
            category: self.key().to_string(),
            unit: key.to_string(),
        })
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ToolError::UnknownCategory(s.to_string()))
    }
}

// ============================================================================
// TEMPERATURE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "celsius" => Some(TemperatureUnit::Celsius),
            "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "kelvin" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }
}

/// Convert through Celsius: source → °C → target
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    let celsius = match from {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Kelvin => value - 273.15,
    };

    match to {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Kelvin => celsius + 273.15,
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Numeric conversion. None when either unit doesn't belong to the category.
pub fn convert_value(value: f64, from: &str, to: &str, category: Category) -> Option<f64> {
    if category == Category::Temperature {
        let from = TemperatureUnit::from_key(from)?;
        let to = TemperatureUnit::from_key(to)?;
        return Some(convert_temperature(value, from, to));
    }

    let from_factor = category.unit(from)?.factor;
    let to_factor = category.unit(to)?.factor;

    Some(value * from_factor / to_factor)
}

/// Display-level conversion: text in, text out.
///
/// Returns an empty string when the input is blank or not a number, or when a
/// unit is missing. That empty string is the "nothing to show" state, not an error.
pub fn convert(value: &str, from: &str, to: &str, category: Category) -> String {
    if from.is_empty() || to.is_empty() {
        return String::new();
    }

    let Some(number) = parse_number(value) else {
        return String::new();
    };

    convert_value(number, from, to, category)
        .map(format_display)
        .unwrap_or_default()
}

/// Parse user input as a finite number; blank and non-numeric input yield None
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Six fixed decimals, then trailing zeros and a dangling point removed
pub fn format_display(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let fixed = format!("{:.6}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    // "-0.0000001" rounds to "-0.000000"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

// ============================================================================
// CONVERTER STATE
// ============================================================================

/// Which side of the converter is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

/// Two linked value fields; editing either side recomputes the other
#[derive(Debug, Clone, PartialEq)]
pub struct UnitConverter {
    pub category: Category,
    pub from_unit: &'static str,
    pub to_unit: &'static str,
    pub from_value: String,
    pub to_value: String,
}

impl UnitConverter {
    pub fn new() -> Self {
        let mut converter = UnitConverter {
            category: Category::Length,
            from_unit: "",
            to_unit: "",
            from_value: String::new(),
            to_value: String::new(),
        };
        converter.set_category(Category::Length);
        converter
    }

    /// Switch category: values are cleared and units reset to the first two of the table
    pub fn set_category(&mut self, category: Category) {
        let units = category.units();
        self.category = category;
        self.from_unit = units.first().map(|u| u.key).unwrap_or("");
        self.to_unit = units.get(1).or(units.first()).map(|u| u.key).unwrap_or("");
        self.from_value.clear();
        self.to_value.clear();
    }

    pub fn set_from_value(&mut self, value: &str) {
        self.from_value = value.to_string();
        self.to_value = convert(value, self.from_unit, self.to_unit, self.category);
    }

    pub fn set_to_value(&mut self, value: &str) {
        self.to_value = value.to_string();
        self.from_value = convert(value, self.to_unit, self.from_unit, self.category);
    }

    pub fn value(&self, side: Side) -> &str {
        match side {
            Side::From => &self.from_value,
            Side::To => &self.to_value,
        }
    }

    /// Replace the text of one side, recomputing the other
    pub fn set_value(&mut self, side: Side, value: &str) {
        match side {
            Side::From => self.set_from_value(value),
            Side::To => self.set_to_value(value),
        }
    }

    pub fn set_from_unit(&mut self, key: &str) -> ToolResult<()> {
        self.from_unit = self.category.require_unit(key)?.key;
        self.refresh();
        Ok(())
    }

    pub fn set_to_unit(&mut self, key: &str) -> ToolResult<()> {
        self.to_unit = self.category.require_unit(key)?.key;
        self.refresh();
        Ok(())
    }

    /// Step one side's unit through the category table, wrapping around
    pub fn cycle_unit(&mut self, side: Side, forward: bool) {
        let units = self.category.units();
        if units.is_empty() {
            return;
        }

        let current = match side {
            Side::From => self.from_unit,
            Side::To => self.to_unit,
        };
        let idx = units.iter().position(|u| u.key == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % units.len()
        } else {
            (idx + units.len() - 1) % units.len()
        };

        match side {
            Side::From => self.from_unit = units[next].key,
            Side::To => self.to_unit = units[next].key,
        }
        self.refresh();
    }

    /// Transpose units and displayed values; nothing is recomputed
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        std::mem::swap(&mut self.from_value, &mut self.to_value);
    }

    fn refresh(&mut self) {
        if !self.from_value.is_empty() {
            self.to_value = convert(&self.from_value, self.from_unit, self.to_unit, self.category);
        }
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn test_linear_conversion() {
        assert_eq!(convert("1000", "meter", "kilometer", Category::Length), "1");
        assert_eq!(convert("1", "mile", "meter", Category::Length), "1609.34");
        assert_eq!(convert("1", "pound", "gram", Category::Weight), "453.592");
        assert_eq!(convert("2", "hectare", "squaremeter", Category::Area), "20000");
        assert_eq!(convert("1", "milliliter", "liter", Category::Volume), "0.001");
    }

    #[test]
    fn test_temperature_conversion() {
        assert_eq!(convert("100", "celsius", "fahrenheit", Category::Temperature), "212");
        assert_eq!(convert("32", "fahrenheit", "celsius", Category::Temperature), "0");
        assert_eq!(convert("0", "kelvin", "celsius", Category::Temperature), "-273.15");
        assert_eq!(convert("25", "celsius", "celsius", Category::Temperature), "25");
        assert_eq!(convert("212", "fahrenheit", "kelvin", Category::Temperature), "373.15");
    }

    #[test]
    fn test_invalid_input_is_empty() {
        assert_eq!(convert("", "meter", "kilometer", Category::Length), "");
        assert_eq!(convert("abc", "meter", "kilometer", Category::Length), "");
        assert_eq!(convert("12", "", "kilometer", Category::Length), "");
        assert_eq!(convert("12", "meter", "gram", Category::Length), "");
        assert_eq!(convert("12", "meter", "kelvin", Category::Temperature), "");
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_display(1.0), "1");
        assert_eq!(format_display(0.0), "0");
        assert_eq!(format_display(10.5), "10.5");
        assert_eq!(format_display(100.0), "100");
        assert_eq!(format_display(1.0 / 3.0), "0.333333");
        assert_eq!(format_display(0.0000001), "0");
        assert_eq!(format_display(-0.0000001), "0");
        assert_eq!(format_display(f64::NAN), "");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("length".parse::<Category>(), Ok(Category::Length));
        assert_eq!("Temperature".parse::<Category>(), Ok(Category::Temperature));
        assert!("speed".parse::<Category>().is_err());
    }

    #[test]
    fn test_every_category_has_one_base_unit() {
        for category in Category::ALL {
            if category == Category::Temperature {
                continue;
            }
            let base_units = category.units().iter().filter(|u| u.factor == 1.0).count();
            assert_eq!(base_units, 1, "{category} should have exactly one base unit");
            assert!(category.units().iter().all(|u| u.factor > 0.0));
        }
    }

    #[test]
    fn test_meter_to_kilometer_then_swap() {
        let mut converter = UnitConverter::new();
        converter.set_category(Category::Length);
        converter.set_from_unit("meter").unwrap();
        converter.set_to_unit("kilometer").unwrap();
        converter.set_from_value("1000");

        assert_eq!(converter.to_value, "1");

        converter.swap();

        assert_eq!(converter.from_unit, "kilometer");
        assert_eq!(converter.from_value, "1");
        assert_eq!(converter.to_unit, "meter");
        assert_eq!(converter.to_value, "1000");
    }

    #[test]
    fn test_editing_to_side_recomputes_from() {
        let mut converter = UnitConverter::new();
        converter.set_from_unit("foot").unwrap();
        converter.set_to_unit("inch").unwrap();
        converter.set_to_value("24");

        assert_eq!(converter.from_value, "2");
    }

    #[test]
    fn test_category_change_resets_fields() {
        let mut converter = UnitConverter::new();
        converter.set_from_value("5");
        converter.set_category(Category::Weight);

        assert_eq!(converter.from_unit, "kilogram");
        assert_eq!(converter.to_unit, "gram");
        assert!(converter.from_value.is_empty());
        assert!(converter.to_value.is_empty());
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let mut converter = UnitConverter::new();
        let err = converter.set_from_unit("furlong").unwrap_err();
        assert!(matches!(err, ToolError::UnknownUnit { .. }));
        assert_eq!(converter.from_unit, "meter");
    }

    #[test]
    fn test_cycle_unit_wraps_and_recomputes() {
        let mut converter = UnitConverter::new();
        converter.set_from_value("1");
        assert_eq!(converter.to_value, "0.001"); // meter → kilometer

        converter.cycle_unit(Side::To, true);
        assert_eq!(converter.to_unit, "centimeter");
        assert_eq!(converter.to_value, "100");

        converter.cycle_unit(Side::From, false);
        assert_eq!(converter.from_unit, "mile");
    }

    proptest! {
        #[test]
        fn prop_linear_round_trip(v in 0.001f64..1_000_000.0, a in 0usize..8, b in 0usize..8, c in 0usize..4) {
            let category = [Category::Length, Category::Weight, Category::Volume, Category::Area][c];
            let units = category.units();
            let from = units[a % units.len()].key;
            let to = units[b % units.len()].key;

            let there = convert_value(v, from, to, category).unwrap();
            let back = convert_value(there, to, from, category).unwrap();
            prop_assert!(approx(back, v));
        }

        #[test]
        fn prop_temperature_round_trip(v in -500.0f64..5000.0, a in 0usize..3, b in 0usize..3) {
            let from = TEMPERATURE_UNITS[a].key;
            let to = TEMPERATURE_UNITS[b].key;

            let there = convert_value(v, from, to, Category::Temperature).unwrap();
            let back = convert_value(there, to, from, Category::Temperature).unwrap();
            prop_assert!(approx(back, v));
        }
    }
}
