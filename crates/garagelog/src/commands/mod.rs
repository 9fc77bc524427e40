//! # Command Layer
//!
//! UI-agnostic business operations. Each command is a plain function over a
//! borrowed [`GarageStore`](crate::store::garage_store::GarageStore) that takes
//! raw form input, applies the garage's input rules, and calls the
//! repositories.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no terminals, no dialogs, no confirmations.
//! - **Change notification**: repositories publish after their own writes.
//!
//! ## Input Rules
//!
//! - Numeric text (cost, mileage, specs) goes through
//!   [`parse_number`](crate::normalize::parse_number): blank or unparseable
//!   becomes "not set", never an error.
//! - Required text (a new mod's title, a service type) is trimmed; blank is
//!   [`GarageError::Invalid`](crate::error::GarageError::Invalid).
//!
//! ## Command Modules
//!
//! - [`mods`]: add, edit, delete and restore mods
//! - [`services`]: log and delete service entries
//! - [`car`]: car profile edits (name, mileage, MOT, specs, ...)
//! - [`settings`]: destructive resets
//! - [`summary`]: the garage overview

pub mod car;
pub mod mods;
pub mod services;
pub mod settings;
pub mod summary;

/// Trim and treat blank as absent.
pub(crate) fn non_blank(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
