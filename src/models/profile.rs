// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model and form-field coercion.
//!
//! Numeric fields come from text inputs. An empty input means "unset", and so
//! does anything that fails to parse as a positive number. The stored JSON
//! keeps the browser form's shape, where an unset number is `""`.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The single per-session user profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Profile {
    /// Age in years
    #[serde(default, with = "blank_number")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | \"\""))]
    pub age: Option<u32>,
    /// Weight in kg
    #[serde(default, with = "blank_number")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | \"\""))]
    pub weight: Option<f64>,
    /// Height in cm
    #[serde(default, with = "blank_number")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | \"\""))]
    pub height: Option<f64>,
    /// Free-text fitness goals
    #[serde(default)]
    pub goals: String,
}

/// Editable profile form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ProfileField {
    Age,
    Weight,
    Height,
    Goals,
}

/// Whether the profile section shows the form or the saved card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ProfileMode {
    #[default]
    Editing,
    Created,
}

/// Profile section state: the (possibly absent) profile plus its view mode.
///
/// Only the profile is stored. A stored profile reopens in `Created` mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<Profile>", into = "Option<Profile>")]
pub struct ProfileState {
    pub profile: Option<Profile>,
    pub mode: ProfileMode,
}

impl From<Option<Profile>> for ProfileState {
    fn from(profile: Option<Profile>) -> Self {
        let mode = if profile.is_some() {
            ProfileMode::Created
        } else {
            ProfileMode::Editing
        };
        Self { profile, mode }
    }
}

impl From<ProfileState> for Option<Profile> {
    fn from(state: ProfileState) -> Self {
        state.profile
    }
}

impl Profile {
    /// Merge a single raw form input into a copy of this profile.
    pub fn with_field(self, field: ProfileField, raw: &str) -> Self {
        match field {
            ProfileField::Age => Self {
                age: parse_positive_int(raw),
                ..self
            },
            ProfileField::Weight => Self {
                weight: parse_positive_number(raw),
                ..self
            },
            ProfileField::Height => Self {
                height: parse_positive_number(raw),
                ..self
            },
            ProfileField::Goals => Self {
                goals: raw.to_string(),
                ..self
            },
        }
    }
}

impl ProfileState {
    /// Apply a field edit, creating the profile on first edit.
    pub fn edit(self, field: ProfileField, raw: &str) -> Self {
        let profile = self.profile.unwrap_or_default().with_field(field, raw);
        Self {
            profile: Some(profile),
            ..self
        }
    }

    /// Save/Update: Editing -> Created. A no-op until a profile exists.
    pub fn save(self) -> Self {
        if self.profile.is_none() {
            return self;
        }
        Self {
            mode: ProfileMode::Created,
            ..self
        }
    }

    /// Edit: Created -> Editing.
    pub fn start_editing(self) -> Self {
        Self {
            mode: ProfileMode::Editing,
            ..self
        }
    }
}

/// Parse a positive integer from form text. Anything else is "unset".
pub fn parse_positive_int(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Parse a positive, finite number from form text. Anything else is "unset".
pub fn parse_positive_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

/// Numbers accepted from form text and stored snapshots.
pub trait PositiveInput: Sized {
    fn parse_positive(raw: &str) -> Option<Self>;
}

impl PositiveInput for u32 {
    fn parse_positive(raw: &str) -> Option<Self> {
        parse_positive_int(raw)
    }
}

impl PositiveInput for f64 {
    fn parse_positive(raw: &str) -> Option<Self> {
        parse_positive_number(raw)
    }
}

/// Serde adapter for form numbers stored as `number | ""`.
///
/// Reading is lenient per field: any stored value goes through the same
/// positive-number parse as form input, and whatever fails it is unset.
/// One bad field never discards the rest of the profile.
mod blank_number {
    use super::PositiveInput;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(n) => n.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: PositiveInput,
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => T::parse_positive(&n.to_string()),
            Value::String(s) => T::parse_positive(&s),
            _ => None,
        })
    }
}
