// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Submitted form records and their input constraints.

use crate::models::{ProfileField, Workout};
use serde::Deserialize;
use validator::{Validate, ValidationError};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// "Log Daily Workout" form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutForm {
    #[serde(rename = "type")]
    #[validate(custom(function = "not_blank"))]
    pub kind: String,
    #[validate(range(min = 0.0))]
    pub duration: f64,
    #[validate(range(min = 0.0))]
    pub calories: f64,
}

impl WorkoutForm {
    pub fn into_workout(self) -> Workout {
        Workout {
            kind: self.kind,
            duration: self.duration,
            calories: self.calories,
        }
    }
}

/// "Add Goal" form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalForm {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(range(exclusive_min = 0.0))]
    pub target: f64,
}

/// "Create Challenge" input.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChallengeForm {
    #[validate(custom(function = "not_blank"))]
    pub text: String,
}

/// A single profile input change.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileFieldEdit {
    pub field: ProfileField,
    /// Raw input text; empty clears a numeric field.
    #[serde(default)]
    pub value: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout_form(kind: &str, duration: f64, calories: f64) -> WorkoutForm {
        WorkoutForm {
            kind: kind.to_string(),
            duration,
            calories,
        }
    }

    #[test]
    fn test_workout_form_constraints() {
        assert!(workout_form("Running", 30.0, 300.0).validate().is_ok());
        assert!(workout_form("Rest", 0.0, 0.0).validate().is_ok());
        assert!(workout_form("", 30.0, 300.0).validate().is_err());
        assert!(workout_form("  ", 30.0, 300.0).validate().is_err());
        assert!(workout_form("Running", -1.0, 300.0).validate().is_err());
        assert!(workout_form("Running", 30.0, -5.0).validate().is_err());
    }

    #[test]
    fn test_goal_form_requires_positive_target() {
        let ok = GoalForm {
            name: "Run 5k".to_string(),
            target: 5.0,
        };
        assert!(ok.validate().is_ok());

        let zero = GoalForm {
            name: "Run 5k".to_string(),
            target: 0.0,
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_workout_form_reads_type_key() {
        let form: WorkoutForm =
            serde_json::from_str(r#"{"type":"Yoga","duration":45,"calories":200}"#).unwrap();
        let workout = form.into_workout();
        assert_eq!(workout.kind, "Yoga");
        assert_eq!(workout.duration, 45.0);
    }

    #[test]
    fn test_profile_edit_value_defaults_to_empty() {
        let edit: ProfileFieldEdit = serde_json::from_str(r#"{"field":"age"}"#).unwrap();
        assert_eq!(edit.field, ProfileField::Age);
        assert_eq!(edit.value, "");
    }
}
