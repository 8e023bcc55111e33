// ABOUTME: Nutrient value extraction from heterogeneous raw API records
// ABOUTME: Handles bare numbers, comma/dot decimal strings, wrapper objects, and kJ to kcal conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

//! Nutrient extraction.
//!
//! The three food database sources disagree on how a nutrient value is
//! encoded: a bare JSON number, a string using either `.` or `,` as the
//! decimal separator, or a wrapper object carrying `{value|amount, unit}`.
//! This module reduces all of them to a finite `f64` or `None` — an
//! unparsable or non-finite value is treated identically to an absent one
//! and never surfaced as zero.

use serde_json::{Map, Value};

/// Kilojoules per kilocalorie; energies reported in kJ are divided by this
pub const KJ_PER_KCAL: f64 = 4.184;

/// Keep only finite numbers
#[must_use]
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Parse a decimal string that may use `,` as the decimal separator
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok().and_then(finite)
}

/// True when a unit label denotes kilojoules
#[must_use]
pub fn is_kilojoule_unit(unit: &str) -> bool {
    matches!(
        unit.trim().to_lowercase().as_str(),
        "kj" | "kjoule" | "kilojoule" | "kilojoules"
    )
}

/// Extract a finite numeric value from one raw nutrient encoding.
///
/// Accepts a bare number, a decimal string, or a wrapper object with the
/// number under `value` or `amount` and an optional `unit`. Energy wrappers
/// whose unit is kilojoules are converted to kilocalories.
#[must_use]
pub fn extract_value(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64().and_then(finite),
        Value::String(s) => parse_decimal(s),
        Value::Object(wrapper) => {
            let inner = wrapper.get("value").or_else(|| wrapper.get("amount"))?;
            let number = match inner {
                Value::Number(n) => n.as_f64().and_then(finite)?,
                Value::String(s) => parse_decimal(s)?,
                _ => return None,
            };
            let in_kilojoules = wrapper
                .get("unit")
                .and_then(Value::as_str)
                .is_some_and(is_kilojoule_unit);
            if in_kilojoules {
                finite(number / KJ_PER_KCAL)
            } else {
                Some(number)
            }
        }
        _ => None,
    }
}

/// Extract the nutrient stored under `key` in a raw record
#[must_use]
pub fn extract_nutrient(record: &Map<String, Value>, key: &str) -> Option<f64> {
    record.get(key).and_then(extract_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("ENERC_KCAL".into(), value);
        map
    }

    #[test]
    fn bare_numbers_pass_through() {
        assert_eq!(extract_nutrient(&record(json!(52.0)), "ENERC_KCAL"), Some(52.0));
        assert_eq!(extract_nutrient(&record(json!(0)), "ENERC_KCAL"), Some(0.0));
    }

    #[test]
    fn comma_decimal_strings_parse() {
        assert_eq!(extract_nutrient(&record(json!("125,5")), "ENERC_KCAL"), Some(125.5));
        assert_eq!(extract_nutrient(&record(json!("125.5")), "ENERC_KCAL"), Some(125.5));
    }

    #[test]
    fn garbage_strings_are_absent() {
        assert_eq!(extract_nutrient(&record(json!("n/a")), "ENERC_KCAL"), None);
        assert_eq!(extract_nutrient(&record(json!("")), "ENERC_KCAL"), None);
        assert_eq!(extract_nutrient(&record(json!(null)), "ENERC_KCAL"), None);
        assert_eq!(extract_nutrient(&record(json!(["52"])), "ENERC_KCAL"), None);
    }

    #[test]
    fn missing_key_is_absent() {
        assert_eq!(extract_nutrient(&Map::new(), "ENERC_KCAL"), None);
    }

    #[test]
    fn wrapper_objects_unwrap_value_or_amount() {
        let wrapped = record(json!({"value": 12.5, "unit": "g"}));
        assert_eq!(extract_nutrient(&wrapped, "ENERC_KCAL"), Some(12.5));
        let amount = record(json!({"amount": "3,2"}));
        assert_eq!(extract_nutrient(&amount, "ENERC_KCAL"), Some(3.2));
        let empty = record(json!({"unit": "g"}));
        assert_eq!(extract_nutrient(&empty, "ENERC_KCAL"), None);
    }

    #[test]
    fn kilojoule_wrappers_convert_to_kcal() {
        let kj = record(json!({"value": 418.4, "unit": "kJ"}));
        let kcal = extract_nutrient(&kj, "ENERC_KCAL").unwrap();
        assert!((kcal - 100.0).abs() < 1e-9);
        let spelled = record(json!({"value": 4.184, "unit": "kilojoules"}));
        assert!((extract_nutrient(&spelled, "ENERC_KCAL").unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_values_never_surface() {
        // JSON cannot encode NaN/Infinity as numbers, but strings can smuggle them in
        assert_eq!(extract_value(&json!("NaN")), None);
        assert_eq!(extract_value(&json!("inf")), None);
        assert_eq!(extract_value(&json!("Infinity")), None);
    }
}
