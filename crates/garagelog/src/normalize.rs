//! # Parse-With-Defaults
//!
//! Stored payloads may come from older builds, partial writes, or hand edits.
//! Rather than rejecting a record because one field is off, every field is
//! defaulted independently:
//!
//! | Stored value | Result |
//! |--------------|--------|
//! | finite JSON number | the number |
//! | JSON string | [`parse_number`] policy |
//! | anything else, NaN, ±inf | `None` |
//! | missing / non-string text field | `""` |
//! | missing / empty optional string | `None` |
//! | unknown `status` | `installed` |
//! | unknown `mileageUnit` | `mi` |
//!
//! Collection payloads that are not arrays read as empty. Array elements that
//! are not objects are discarded.

use serde_json::{Map, Value};
use tracing::warn;

use crate::model::{
    CarProfile, CarSpecs, MileageUnit, ModEntry, ModStatus, ServiceEntry, DEFAULT_CAR_NAME,
    DEFAULT_GARAGE_TITLE,
};

/// Numeric input policy: trim; empty is `None`; otherwise parse, and keep the
/// value only if it is finite.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn number_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn optional_text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn id_field(obj: &Map<String, Value>) -> String {
    match obj.get("id") {
        Some(Value::String(s)) => s.clone(),
        // Legacy ids were millisecond timestamps.
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Normalize one stored mod object.
pub fn mod_entry_from_value(value: &Value) -> Option<ModEntry> {
    let obj = value.as_object()?;
    let status = match obj.get("status") {
        Some(Value::String(s)) => ModStatus::parse(s).unwrap_or_default(),
        _ => ModStatus::default(),
    };
    Some(ModEntry {
        id: id_field(obj),
        title: text_field(obj, "title"),
        cost: number_field(obj, "cost"),
        date_iso: text_field(obj, "dateISO"),
        notes: text_field(obj, "notes"),
        before_uri: optional_text_field(obj, "beforeUri"),
        after_uri: optional_text_field(obj, "afterUri"),
        status,
    })
}

/// Normalize one stored service object.
pub fn service_entry_from_value(value: &Value) -> Option<ServiceEntry> {
    let obj = value.as_object()?;
    Some(ServiceEntry {
        id: id_field(obj),
        service_type: text_field(obj, "type"),
        date_iso: text_field(obj, "dateISO"),
        mileage: number_field(obj, "mileage"),
        notes: text_field(obj, "notes"),
    })
}

fn specs_from_value(value: Option<&Value>) -> CarSpecs {
    let Some(obj) = value.and_then(Value::as_object) else {
        return CarSpecs::default();
    };
    CarSpecs {
        bhp: number_field(obj, "bhp"),
        mpg: number_field(obj, "mpg"),
        zero_to_sixty: number_field(obj, "zeroToSixty"),
        drivetrain: optional_text_field(obj, "drivetrain"),
        transmission: optional_text_field(obj, "transmission"),
        colour: optional_text_field(obj, "colour"),
    }
}

/// Merge a stored car profile over the defaults. Never fails: a non-object
/// payload yields [`CarProfile::default`].
pub fn car_profile_from_value(value: &Value) -> CarProfile {
    let Some(obj) = value.as_object() else {
        return CarProfile::default();
    };

    let name = match obj.get("name") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => DEFAULT_CAR_NAME.to_string(),
    };
    let garage_title = match obj.get("garageTitle") {
        Some(Value::String(s)) => s.clone(),
        _ => DEFAULT_GARAGE_TITLE.to_string(),
    };
    let mileage_unit = match obj.get("mileageUnit").and_then(Value::as_str) {
        Some("km") => MileageUnit::Km,
        _ => MileageUnit::Mi,
    };

    CarProfile {
        garage_title,
        name,
        hero_image_uri: optional_text_field(obj, "heroImageUri"),
        current_mileage: number_field(obj, "currentMileage"),
        mot_expiry_iso: optional_text_field(obj, "motExpiryISO"),
        specs: specs_from_value(obj.get("specs")),
        mileage_unit,
    }
}

fn collection_from_value<T>(
    key: &str,
    value: &Value,
    parse: impl Fn(&Value) -> Option<T>,
) -> Vec<T> {
    let Some(items) = value.as_array() else {
        warn!(key, "stored collection is not an array, reading as empty");
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(position, item)| {
            let parsed = parse(item);
            if parsed.is_none() {
                warn!(key, position, "discarding non-object record");
            }
            parsed
        })
        .collect()
}

pub fn mods_from_value(key: &str, value: &Value) -> Vec<ModEntry> {
    collection_from_value(key, value, mod_entry_from_value)
}

pub fn services_from_value(key: &str, value: &Value) -> Vec<ServiceEntry> {
    collection_from_value(key, value, service_entry_from_value)
}

/// Unlocked trophy ids: strings kept, numbers and booleans stringified, other
/// elements dropped, duplicates removed keeping the first occurrence.
pub fn trophy_ids_from_value(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    let mut ids: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let id = match item {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
