//! The exercise creation form.

use crate::enumerations::{
    MultiSelect, SingleSelect, DIFFICULTY_LEVELS, EQUIPMENT, EXERCISE_CATEGORIES,
    LINKED_DIET_PLANS, SUITABLE_FOR, TARGET_MUSCLES,
};
use crate::repeat::RepeatableList;
use crate::store::FormDraft;
use crate::validation::{Validate, ValidationErrors};
use crate::FormResult;
use fitveda_preview::ImageFile;
use serde::Serialize;

/// Draft of one exercise being authored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDraft {
    pub name: String,
    pub category: SingleSelect,
    pub target_muscles: MultiSelect,
    pub equipment: MultiSelect,
    pub difficulty: SingleSelect,
    pub description: String,
    pub youtube_url: String,
    pub image: Option<ImageFile>,
    /// Step-by-step instructions, at least one (possibly empty) step.
    pub steps: RepeatableList<String>,
    pub tips: String,
    pub mistakes: String,
    pub duration_secs: Option<u32>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub rest_secs: Option<u32>,
    pub calories: Option<u32>,
    pub suitable_for: MultiSelect,
    pub diet_plans: MultiSelect,
}

/// A single field replacement on an [`ExerciseDraft`].
#[derive(Debug, Clone)]
pub enum ExerciseField {
    Name(String),
    Category(String),
    TargetMuscles(Vec<String>),
    Equipment(Vec<String>),
    Difficulty(String),
    Description(String),
    YoutubeUrl(String),
    Image(Option<ImageFile>),
    AppendStep,
    RemoveStep(usize),
    Step(usize, String),
    Tips(String),
    Mistakes(String),
    DurationSecs(Option<u32>),
    Sets(Option<u32>),
    Reps(Option<u32>),
    RestSecs(Option<u32>),
    Calories(Option<u32>),
    SuitableFor(Vec<String>),
    DietPlans(Vec<String>),
}

impl FormDraft for ExerciseDraft {
    type Field = ExerciseField;

    fn new_draft() -> Self {
        Self {
            name: String::new(),
            category: SingleSelect::new(&EXERCISE_CATEGORIES),
            target_muscles: MultiSelect::new(&TARGET_MUSCLES),
            equipment: MultiSelect::new(&EQUIPMENT),
            difficulty: SingleSelect::new(&DIFFICULTY_LEVELS),
            description: String::new(),
            youtube_url: String::new(),
            image: None,
            steps: RepeatableList::new(),
            tips: String::new(),
            mistakes: String::new(),
            duration_secs: None,
            sets: None,
            reps: None,
            rest_secs: None,
            calories: None,
            suitable_for: MultiSelect::new(&SUITABLE_FOR),
            diet_plans: MultiSelect::new(&LINKED_DIET_PLANS),
        }
    }

    fn apply(mut self, field: ExerciseField) -> FormResult<Self> {
        match field {
            ExerciseField::Name(v) => self.name = v,
            ExerciseField::Category(v) => self.category.select(&v)?,
            ExerciseField::TargetMuscles(vs) => self.target_muscles.replace(vs)?,
            ExerciseField::Equipment(vs) => self.equipment.replace(vs)?,
            ExerciseField::Difficulty(v) => self.difficulty.select(&v)?,
            ExerciseField::Description(v) => self.description = v,
            ExerciseField::YoutubeUrl(v) => self.youtube_url = v,
            ExerciseField::Image(file) => self.image = file,
            ExerciseField::AppendStep => self.steps.append(),
            ExerciseField::RemoveStep(index) => self.steps.remove_at(index),
            ExerciseField::Step(index, v) => self.steps.update_at(index, |step| *step = v),
            ExerciseField::Tips(v) => self.tips = v,
            ExerciseField::Mistakes(v) => self.mistakes = v,
            ExerciseField::DurationSecs(v) => self.duration_secs = v,
            ExerciseField::Sets(v) => self.sets = v,
            ExerciseField::Reps(v) => self.reps = v,
            ExerciseField::RestSecs(v) => self.rest_secs = v,
            ExerciseField::Calories(v) => self.calories = v,
            ExerciseField::SuitableFor(vs) => self.suitable_for.replace(vs)?,
            ExerciseField::DietPlans(vs) => self.diet_plans.replace(vs)?,
        }
        Ok(self)
    }
}

impl Validate for ExerciseDraft {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("name", !self.name.trim().is_empty());
        errors.require("category", !self.category.is_empty());
        errors.require("youtubeUrl", !self.youtube_url.trim().is_empty());
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FormStateStore;
    use crate::validation::REQUIRED;
    use crate::FormError;

    fn filled_store() -> FormStateStore<ExerciseDraft> {
        let mut store: FormStateStore<ExerciseDraft> = FormStateStore::open();
        store
            .update(ExerciseField::Name("Incline Press".into()))
            .expect("update should succeed");
        store
            .update(ExerciseField::Category("Chest".into()))
            .expect("update should succeed");
        store
            .update(ExerciseField::YoutubeUrl(
                "https://youtu.be/dQw4w9WgXcQ".into(),
            ))
            .expect("update should succeed");
        store
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = ExerciseDraft::new_draft();
        assert!(draft.name.is_empty());
        assert!(draft.category.is_empty());
        assert_eq!(draft.steps.len(), 1);
        assert_eq!(draft.duration_secs, None);
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_step_operations_keep_order_and_minimum() {
        let mut store = filled_store();
        store
            .update(ExerciseField::Step(0, "Lie back on the bench".into()))
            .expect("update should succeed");
        store
            .update(ExerciseField::AppendStep)
            .expect("update should succeed");
        store
            .update(ExerciseField::Step(1, "Press up".into()))
            .expect("update should succeed");
        store
            .update(ExerciseField::RemoveStep(0))
            .expect("update should succeed");

        assert_eq!(store.draft().steps.items(), &["Press up".to_owned()]);

        // Length one now: removal is a no-op.
        store
            .update(ExerciseField::RemoveStep(0))
            .expect("update should succeed");
        assert_eq!(store.draft().steps.len(), 1);
    }

    #[test]
    fn test_selection_outside_registry_is_rejected() {
        let mut store = filled_store();
        let before = store.draft().clone();

        let err = store
            .update(ExerciseField::TargetMuscles(vec!["Wings".into()]))
            .expect_err("unregistered muscle should be rejected");
        assert!(matches!(err, FormError::UnknownOption { .. }));
        assert_eq!(store.draft(), &before);
    }

    #[test]
    fn test_validation_requires_name_category_and_video() {
        let draft = ExerciseDraft::new_draft();
        let errors = draft.validate();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.message_for("name"), Some(REQUIRED));
        assert_eq!(errors.message_for("category"), Some(REQUIRED));
        assert_eq!(errors.message_for("youtubeUrl"), Some(REQUIRED));

        assert!(filled_store().draft().validate().is_empty());
    }

    #[test]
    fn test_payload_uses_camel_case_field_names() {
        let store = filled_store();
        let json = serde_json::to_value(store.draft()).expect("draft should serialise");

        assert_eq!(json["name"], "Incline Press");
        assert_eq!(json["category"], "Chest");
        assert_eq!(json["youtubeUrl"], "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(json["targetMuscles"], serde_json::json!([]));
        assert_eq!(json["steps"], serde_json::json!([""]));
        assert_eq!(json["image"], serde_json::Value::Null);
    }
}
