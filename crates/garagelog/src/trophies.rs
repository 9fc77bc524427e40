//! # Trophy Engine
//!
//! Trophies are derived, never stored: every evaluation recomputes nine fixed
//! boolean predicates from the current mods and car profile. Only the set of
//! ids that have already been *unlocked* is persisted, and it only grows
//! (until an explicit reset).
//!
//! | id | earned when |
//! |----|-------------|
//! | `first_mod` | at least one mod |
//! | `first_installed` | at least one installed mod |
//! | `planner` | at least one planned mod |
//! | `before_after` | some mod has both a before and an after image |
//! | `five_installed` | at least five installed mods |
//! | `thousand_spent` | installed mods cost at least 1000 in total |
//! | `mileage_set` | current mileage is set |
//! | `mot_set` | MOT expiry is set |
//! | `spec_master` | all six spec fields are set |
//!
//! Table order is the display order and the tie-break order for
//! [`TrophyEngine::check_for_new_unlock`].
//!
//! ## One Unlock Per Check
//!
//! When several trophies become earned between two checks, the check reports
//! only the first of them in table order. All of them are persisted as
//! unlocked in the same write, so the others are never reported as new.

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::model::{CarProfile, ModEntry, ModStatus};
use crate::store::backend::StorageBackend;
use crate::store::garage_store::GarageStore;

const FIVE_INSTALLED: usize = 5;
const SPEND_TARGET: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrophyId {
    FirstMod,
    FirstInstalled,
    Planner,
    BeforeAfter,
    FiveInstalled,
    ThousandSpent,
    MileageSet,
    MotSet,
    SpecMaster,
}

impl TrophyId {
    pub const ALL: [TrophyId; 9] = [
        TrophyId::FirstMod,
        TrophyId::FirstInstalled,
        TrophyId::Planner,
        TrophyId::BeforeAfter,
        TrophyId::FiveInstalled,
        TrophyId::ThousandSpent,
        TrophyId::MileageSet,
        TrophyId::MotSet,
        TrophyId::SpecMaster,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TrophyId::FirstMod => "first_mod",
            TrophyId::FirstInstalled => "first_installed",
            TrophyId::Planner => "planner",
            TrophyId::BeforeAfter => "before_after",
            TrophyId::FiveInstalled => "five_installed",
            TrophyId::ThousandSpent => "thousand_spent",
            TrophyId::MileageSet => "mileage_set",
            TrophyId::MotSet => "mot_set",
            TrophyId::SpecMaster => "spec_master",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TrophyId::FirstMod => "First Mod",
            TrophyId::FirstInstalled => "Installed Something",
            TrophyId::Planner => "Planner",
            TrophyId::BeforeAfter => "Before & After",
            TrophyId::FiveInstalled => "Build Momentum",
            TrophyId::ThousandSpent => "Investor",
            TrophyId::MileageSet => "Miles Matter",
            TrophyId::MotSet => "Road Legal",
            TrophyId::SpecMaster => "Spec Master",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TrophyId::FirstMod => "🏁",
            TrophyId::FirstInstalled => "🛠️",
            TrophyId::Planner => "🧠",
            TrophyId::BeforeAfter => "📸",
            TrophyId::FiveInstalled => "🔥",
            TrophyId::ThousandSpent => "💸",
            TrophyId::MileageSet => "🛣️",
            TrophyId::MotSet => "🧾",
            TrophyId::SpecMaster => "📋",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TrophyId::FirstMod => "Add your first mod.",
            TrophyId::FirstInstalled => "Install your first mod.",
            TrophyId::Planner => "Add your first planned mod.",
            TrophyId::BeforeAfter => "Log a mod with both before and after photos.",
            TrophyId::FiveInstalled => "Install 5 mods.",
            TrophyId::ThousandSpent => "Spend £1,000 on installed mods.",
            TrophyId::MileageSet => "Set your current mileage.",
            TrophyId::MotSet => "Set your MOT expiry date.",
            TrophyId::SpecMaster => "Complete your spec sheet (incl. colour).",
        }
    }

    fn is_earned(self, facts: &TrophyFacts) -> bool {
        match self {
            TrophyId::FirstMod => facts.mod_count >= 1,
            TrophyId::FirstInstalled => facts.installed_count >= 1,
            TrophyId::Planner => facts.planned_count >= 1,
            TrophyId::BeforeAfter => facts.has_before_after,
            TrophyId::FiveInstalled => facts.installed_count >= FIVE_INSTALLED,
            TrophyId::ThousandSpent => facts.installed_spend >= SPEND_TARGET,
            TrophyId::MileageSet => facts.has_mileage,
            TrophyId::MotSet => facts.has_mot,
            TrophyId::SpecMaster => facts.spec_complete,
        }
    }

    fn progress(self, facts: &TrophyFacts) -> String {
        let flag = |done: bool| if done { "1/1" } else { "0/1" }.to_string();
        match self {
            TrophyId::FirstMod => format!("{}/1", facts.mod_count.min(1)),
            TrophyId::FirstInstalled => format!("{}/1", facts.installed_count.min(1)),
            TrophyId::Planner => format!("{}/1", facts.planned_count.min(1)),
            TrophyId::FiveInstalled => format!(
                "{}/{}",
                facts.installed_count.min(FIVE_INSTALLED),
                FIVE_INSTALLED
            ),
            TrophyId::ThousandSpent => format!(
                "£{}/£{}",
                group_thousands(facts.installed_spend.min(SPEND_TARGET)),
                group_thousands(SPEND_TARGET)
            ),
            TrophyId::BeforeAfter => flag(facts.has_before_after),
            TrophyId::MileageSet => flag(facts.has_mileage),
            TrophyId::MotSet => flag(facts.has_mot),
            TrophyId::SpecMaster => flag(facts.spec_complete),
        }
    }
}

impl std::fmt::Display for TrophyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `1234.5` → `"1,234.5"`; whole amounts drop the fraction.
fn group_thousands(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let whole = rounded.trunc() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        grouped.insert(0, '-');
    }
    let cents = ((rounded - rounded.trunc()).abs() * 100.0).round() as i64;
    if cents == 0 {
        grouped
    } else if cents % 10 == 0 {
        format!("{}.{}", grouped, cents / 10)
    } else {
        format!("{}.{:02}", grouped, cents)
    }
}

/// Aggregates the predicates are evaluated over.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrophyFacts {
    pub mod_count: usize,
    pub installed_count: usize,
    pub planned_count: usize,
    pub has_before_after: bool,
    /// Sum of finite costs over installed mods only.
    pub installed_spend: f64,
    pub has_mileage: bool,
    pub has_mot: bool,
    pub spec_complete: bool,
}

impl TrophyFacts {
    pub fn gather(mods: &[ModEntry], car: &CarProfile) -> Self {
        let installed = || mods.iter().filter(|m| m.status == ModStatus::Installed);
        Self {
            mod_count: mods.len(),
            installed_count: installed().count(),
            planned_count: mods
                .iter()
                .filter(|m| m.status == ModStatus::Planned)
                .count(),
            has_before_after: mods.iter().any(ModEntry::has_before_and_after),
            installed_spend: installed().map(ModEntry::spend).sum(),
            has_mileage: car.current_mileage.is_some(),
            has_mot: car.mot_expiry_iso.as_deref().is_some_and(|s| !s.is_empty()),
            spec_complete: car.specs.is_complete(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrophyDefinition {
    pub id: TrophyId,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub earned: bool,
    pub progress: String,
}

/// All nine definitions, in table order, for the given facts.
pub fn evaluate_facts(facts: &TrophyFacts) -> Vec<TrophyDefinition> {
    TrophyId::ALL
        .into_iter()
        .map(|id| TrophyDefinition {
            id,
            title: id.title(),
            icon: id.icon(),
            description: id.description(),
            earned: id.is_earned(facts),
            progress: id.progress(facts),
        })
        .collect()
}

pub struct TrophyEngine<'s, B: StorageBackend> {
    store: &'s GarageStore<B>,
}

impl<'s, B: StorageBackend> TrophyEngine<'s, B> {
    pub(crate) fn new(store: &'s GarageStore<B>) -> Self {
        Self { store }
    }

    pub fn facts(&self) -> TrophyFacts {
        let mods = self.store.mods().list();
        let car = self.store.car().get();
        TrophyFacts::gather(&mods, &car)
    }

    pub fn evaluate(&self) -> Vec<TrophyDefinition> {
        evaluate_facts(&self.facts())
    }

    pub fn earned_count(&self) -> usize {
        self.evaluate().iter().filter(|t| t.earned).count()
    }

    /// Report the first newly earned trophy, if any, and persist every newly
    /// earned id as unlocked.
    ///
    /// Writes nothing when there is nothing new. A malformed store reads as
    /// "nothing earned"; only a failed write of the unlocked set is an error.
    pub fn check_for_new_unlock(&self) -> Result<Option<TrophyDefinition>> {
        let trophies = self.evaluate();
        let repo = self.store.unlocked_trophies();
        let mut unlocked = repo.list();

        let newly: Vec<TrophyId> = trophies
            .iter()
            .filter(|t| t.earned && !unlocked.iter().any(|id| id == t.id.as_str()))
            .map(|t| t.id)
            .collect();

        let Some(&first) = newly.first() else {
            return Ok(None);
        };

        unlocked.extend(newly.iter().map(|id| id.as_str().to_string()));
        repo.save(&unlocked)?;

        info!(
            trophy = %first,
            silently_unlocked = newly.len() - 1,
            "trophy unlocked"
        );
        Ok(trophies.into_iter().find(|t| t.id == first))
    }
}
