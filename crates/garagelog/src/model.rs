//! # Domain Model
//!
//! The persisted records of the garage: [`ModEntry`], [`ServiceEntry`] and the
//! singleton [`CarProfile`] (with its [`CarSpecs`]).
//!
//! ## Wire Shape
//!
//! Records serialize to camelCase JSON with lowercase enum values, e.g.
//!
//! ```text
//! { "id": "…", "title": "Coilovers", "cost": 850.0, "dateISO": "2024-05-01T09:30:00.000Z",
//!   "notes": "", "beforeUri": null, "afterUri": null, "status": "installed" }
//! ```
//!
//! Only `Serialize` is derived. Reading goes through [`crate::normalize`], which
//! defaults every field independently instead of rejecting a whole record.
//!
//! ## Identifiers
//!
//! New records get a random v4 UUID string. Ids written by older builds (e.g.
//! millisecond timestamps) remain valid: ids are opaque to all logic.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const DEFAULT_CAR_NAME: &str = "My Car";
pub const DEFAULT_GARAGE_TITLE: &str = "My Garage";

/// Current instant as an ISO-8601 string with millisecond precision and a `Z` suffix.
pub fn now_iso() -> String {
    to_iso(Utc::now())
}

pub fn to_iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModStatus {
    Planned,
    #[default]
    Installed,
    Removed,
}

impl ModStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "planned" => Some(ModStatus::Planned),
            "installed" => Some(ModStatus::Installed),
            "removed" => Some(ModStatus::Removed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModEntry {
    pub id: String,
    pub title: String,
    pub cost: Option<f64>,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub notes: String,
    pub before_uri: Option<String>,
    pub after_uri: Option<String>,
    pub status: ModStatus,
}

impl ModEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            cost: None,
            date_iso: now_iso(),
            notes: String::new(),
            before_uri: None,
            after_uri: None,
            status: ModStatus::Installed,
        }
    }

    pub fn with_status(mut self, status: ModStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn has_before_and_after(&self) -> bool {
        self.before_uri.is_some() && self.after_uri.is_some()
    }

    /// Cost as a spend contribution: missing or non-finite costs count as 0.
    pub fn spend(&self) -> f64 {
        self.cost.filter(|c| c.is_finite()).unwrap_or(0.0)
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.date_iso)
            .ok()
            .map(|d| d.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub id: String,
    /// Free-form service kind, e.g. "Oil change".
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    pub mileage: Option<f64>,
    pub notes: String,
}

impl ServiceEntry {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            service_type: service_type.into(),
            date_iso: now_iso(),
            mileage: None,
            notes: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MileageUnit {
    #[default]
    Mi,
    Km,
}

impl MileageUnit {
    pub fn label(self) -> &'static str {
        match self {
            MileageUnit::Mi => "mi",
            MileageUnit::Km => "km",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSpecs {
    pub bhp: Option<f64>,
    pub mpg: Option<f64>,
    pub zero_to_sixty: Option<f64>,
    pub drivetrain: Option<String>,
    pub transmission: Option<String>,
    pub colour: Option<String>,
}

impl CarSpecs {
    /// True when all six spec fields are filled in.
    pub fn is_complete(&self) -> bool {
        let filled = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.is_empty());
        self.bhp.is_some()
            && self.mpg.is_some()
            && self.zero_to_sixty.is_some()
            && filled(&self.drivetrain)
            && filled(&self.transmission)
            && filled(&self.colour)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarProfile {
    pub garage_title: String,
    pub name: String,
    pub hero_image_uri: Option<String>,
    pub current_mileage: Option<f64>,
    #[serde(rename = "motExpiryISO")]
    pub mot_expiry_iso: Option<String>,
    pub specs: CarSpecs,
    pub mileage_unit: MileageUnit,
}

impl Default for CarProfile {
    fn default() -> Self {
        Self {
            garage_title: DEFAULT_GARAGE_TITLE.to_string(),
            name: DEFAULT_CAR_NAME.to_string(),
            hero_image_uri: None,
            current_mileage: None,
            mot_expiry_iso: None,
            specs: CarSpecs::default(),
            mileage_unit: MileageUnit::Mi,
        }
    }
}
