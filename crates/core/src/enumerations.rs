//! The enumeration registry.
//!
//! Fixed allowed-value sets for every select field across the authoring
//! forms. Values are exact strings and their declaration order is the
//! display order. Select fields validate membership on every mutation, so a
//! draft can never hold a value outside the registry for its field.

use crate::{FormError, FormResult};
use serde::Serialize;

/// One registered enumeration: a field name and its ordered allowed values.
#[derive(Debug, PartialEq, Eq)]
pub struct Enumeration {
    name: &'static str,
    values: &'static [&'static str],
}

impl Enumeration {
    /// Returns the field name this enumeration belongs to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the allowed values in display order.
    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }

    /// Returns whether `value` is an allowed member.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }

    fn check(&self, value: &str) -> FormResult<()> {
        if self.contains(value) {
            return Ok(());
        }
        Err(FormError::UnknownOption {
            field: self.name,
            value: value.to_owned(),
        })
    }
}

pub static EXERCISE_CATEGORIES: Enumeration = Enumeration {
    name: "category",
    values: &["Chest", "Back", "Legs", "Arms", "Shoulders", "Cardio", "Core"],
};

pub static TARGET_MUSCLES: Enumeration = Enumeration {
    name: "targetMuscles",
    values: &[
        "Biceps",
        "Triceps",
        "Quads",
        "Hamstrings",
        "Glutes",
        "Abs",
        "Calves",
        "Forearms",
        "Lats",
        "Pecs",
        "Deltoids",
    ],
};

pub static EQUIPMENT: Enumeration = Enumeration {
    name: "equipment",
    values: &[
        "Dumbbell",
        "Barbell",
        "Machine",
        "Bodyweight",
        "Kettlebell",
        "Cable",
        "Resistance Band",
    ],
};

pub static DIFFICULTY_LEVELS: Enumeration = Enumeration {
    name: "difficulty",
    values: &["Beginner", "Intermediate", "Advanced"],
};

pub static SUITABLE_FOR: Enumeration = Enumeration {
    name: "suitableFor",
    values: &["Men", "Women", "Seniors", "Beginners"],
};

// Upstream entity lists are placeholders until the backend exists.
pub static LINKED_DIET_PLANS: Enumeration = Enumeration {
    name: "dietPlans",
    values: &["Plan A", "Plan B", "Plan C"],
};

pub static LINKED_EXERCISES: Enumeration = Enumeration {
    name: "exercises",
    values: &["Push Up", "Squat", "Deadlift"],
};

pub static DIET_GOALS: Enumeration = Enumeration {
    name: "goal",
    values: &["Weight Loss", "Muscle Gain", "Maintenance"],
};

pub static BLOG_CATEGORIES: Enumeration = Enumeration {
    name: "category",
    values: &[
        "Motivation",
        "Nutrition",
        "Workout Tips",
        "Success Stories",
        "Mental Health",
        "Challenges",
    ],
};

pub static VISIBILITIES: Enumeration = Enumeration {
    name: "visibility",
    values: &["Public", "Private", "Scheduled"],
};

/// One-click tag suggestions shown next to the blog tag input.
pub const TRENDING_TAGS: &[&str] = &[
    "motivation",
    "zenz",
    "fitveda",
    "workout",
    "nutrition",
    "challenge",
    "success",
];

/// A single-choice select bound to one registered enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SingleSelect {
    #[serde(skip)]
    enumeration: &'static Enumeration,
    selected: Option<String>,
}

impl SingleSelect {
    /// Creates an empty select bound to `enumeration`.
    pub fn new(enumeration: &'static Enumeration) -> Self {
        Self {
            enumeration,
            selected: None,
        }
    }

    /// Creates a select pre-populated with a value known to be registered.
    pub(crate) fn preset(enumeration: &'static Enumeration, value: &'static str) -> Self {
        debug_assert!(enumeration.contains(value));
        Self {
            enumeration,
            selected: Some(value.to_owned()),
        }
    }

    /// Replaces the selection.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownOption` if `value` is not a member of the
    /// bound enumeration; the selection is left unchanged.
    pub fn select(&mut self, value: &str) -> FormResult<()> {
        self.enumeration.check(value)?;
        self.selected = Some(value.to_owned());
        Ok(())
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Returns the selected value, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Returns whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Returns the enumeration this select is bound to.
    pub fn enumeration(&self) -> &'static Enumeration {
        self.enumeration
    }
}

/// A multi-choice select bound to one registered enumeration.
///
/// Selection order is preserved for display; duplicates are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MultiSelect {
    #[serde(skip)]
    enumeration: &'static Enumeration,
    selected: Vec<String>,
}

impl MultiSelect {
    /// Creates an empty select bound to `enumeration`.
    pub fn new(enumeration: &'static Enumeration) -> Self {
        Self {
            enumeration,
            selected: Vec::new(),
        }
    }

    /// Adds `value` to the selection; selecting an already-selected value is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownOption` if `value` is not a member of the
    /// bound enumeration; the selection is left unchanged.
    pub fn select(&mut self, value: &str) -> FormResult<()> {
        self.enumeration.check(value)?;
        if !self.selected.iter().any(|v| v == value) {
            self.selected.push(value.to_owned());
        }
        Ok(())
    }

    /// Removes `value` from the selection; deselecting an absent value is a
    /// no-op.
    pub fn deselect(&mut self, value: &str) {
        self.selected.retain(|v| v != value);
    }

    /// Replaces the whole selection, preserving the order given.
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnknownOption` on the first value that is not a
    /// member of the bound enumeration; the selection is left unchanged.
    pub fn replace(&mut self, values: Vec<String>) -> FormResult<()> {
        for value in &values {
            self.enumeration.check(value)?;
        }
        self.selected.clear();
        for value in values {
            if !self.selected.iter().any(|v| *v == value) {
                self.selected.push(value);
            }
        }
        Ok(())
    }

    /// Returns the selected values in selection order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Returns whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns the enumeration this select is bound to.
    pub fn enumeration(&self) -> &'static Enumeration {
        self.enumeration
    }
}
