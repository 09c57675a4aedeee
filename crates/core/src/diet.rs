//! The diet-plan creation form.

use crate::enumerations::{MultiSelect, SingleSelect, DIET_GOALS, LINKED_EXERCISES};
use crate::repeat::RepeatableList;
use crate::store::FormDraft;
use crate::validation::{Validate, ValidationErrors};
use crate::FormResult;
use fitveda_preview::ImageFile;
use serde::Serialize;

/// One meal inside a diet plan.
///
/// Meals have no identity beyond their position in the plan's meal list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    /// Time of day, as entered (`HH:MM`).
    pub time: String,
    pub items: String,
    pub calories: Option<u32>,
    pub carbs_g: Option<u32>,
    pub protein_g: Option<u32>,
    pub fat_g: Option<u32>,
    pub image: Option<ImageFile>,
}

/// A single field replacement on one [`Meal`].
#[derive(Debug, Clone)]
pub enum MealField {
    Name(String),
    Time(String),
    Items(String),
    Calories(Option<u32>),
    CarbsG(Option<u32>),
    ProteinG(Option<u32>),
    FatG(Option<u32>),
    Image(Option<ImageFile>),
}

impl Meal {
    fn apply(&mut self, field: MealField) {
        match field {
            MealField::Name(v) => self.name = v,
            MealField::Time(v) => self.time = v,
            MealField::Items(v) => self.items = v,
            MealField::Calories(v) => self.calories = v,
            MealField::CarbsG(v) => self.carbs_g = v,
            MealField::ProteinG(v) => self.protein_g = v,
            MealField::FatG(v) => self.fat_g = v,
            MealField::Image(file) => self.image = file,
        }
    }
}

/// Draft of one diet plan being authored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanDraft {
    pub name: String,
    pub exercises: MultiSelect,
    pub goal: SingleSelect,
    pub duration_days: Option<u32>,
    pub description: String,
    /// Meals in serving order, at least one.
    pub meals: RepeatableList<Meal>,
    pub tips: String,
    pub water_litres: Option<f64>,
    pub supplements: String,
    pub notes: String,
}

/// A single field replacement on a [`DietPlanDraft`].
#[derive(Debug, Clone)]
pub enum DietPlanField {
    Name(String),
    Exercises(Vec<String>),
    Goal(String),
    DurationDays(Option<u32>),
    Description(String),
    AppendMeal,
    RemoveMeal(usize),
    Meal(usize, MealField),
    Tips(String),
    WaterLitres(Option<f64>),
    Supplements(String),
    Notes(String),
}

impl FormDraft for DietPlanDraft {
    type Field = DietPlanField;

    fn new_draft() -> Self {
        Self {
            name: String::new(),
            exercises: MultiSelect::new(&LINKED_EXERCISES),
            goal: SingleSelect::new(&DIET_GOALS),
            duration_days: None,
            description: String::new(),
            meals: RepeatableList::new(),
            tips: String::new(),
            water_litres: None,
            supplements: String::new(),
            notes: String::new(),
        }
    }

    fn apply(mut self, field: DietPlanField) -> FormResult<Self> {
        match field {
            DietPlanField::Name(v) => self.name = v,
            DietPlanField::Exercises(vs) => self.exercises.replace(vs)?,
            DietPlanField::Goal(v) => self.goal.select(&v)?,
            DietPlanField::DurationDays(v) => self.duration_days = v,
            DietPlanField::Description(v) => self.description = v,
            DietPlanField::AppendMeal => self.meals.append(),
            DietPlanField::RemoveMeal(index) => self.meals.remove_at(index),
            DietPlanField::Meal(index, meal_field) => {
                self.meals.update_at(index, |meal| meal.apply(meal_field));
            }
            DietPlanField::Tips(v) => self.tips = v,
            DietPlanField::WaterLitres(v) => self.water_litres = v,
            DietPlanField::Supplements(v) => self.supplements = v,
            DietPlanField::Notes(v) => self.notes = v,
        }
        Ok(self)
    }
}

impl Validate for DietPlanDraft {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("name", !self.name.trim().is_empty());
        errors.require("goal", !self.goal.is_empty());
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FormStateStore;
    use crate::validation::REQUIRED;

    #[test]
    fn test_new_draft_opens_with_one_empty_meal() {
        let draft = DietPlanDraft::new_draft();
        assert_eq!(draft.meals.len(), 1);
        assert_eq!(draft.meals.items()[0], Meal::default());
    }

    #[test]
    fn test_meal_update_touches_only_the_named_meal_field() {
        let mut store: FormStateStore<DietPlanDraft> = FormStateStore::open();
        store
            .update(DietPlanField::AppendMeal)
            .expect("update should succeed");
        store
            .update(DietPlanField::Meal(0, MealField::Name("Breakfast".into())))
            .expect("update should succeed");
        store
            .update(DietPlanField::Meal(0, MealField::Calories(Some(450))))
            .expect("update should succeed");
        store
            .update(DietPlanField::Meal(1, MealField::Name("Lunch".into())))
            .expect("update should succeed");

        let meals = store.draft().meals.items();
        assert_eq!(meals[0].name, "Breakfast");
        assert_eq!(meals[0].calories, Some(450));
        assert_eq!(meals[0].time, "");
        assert_eq!(meals[1].name, "Lunch");
        assert_eq!(meals[1].calories, None);
    }

    #[test]
    fn test_remove_meal_is_a_noop_at_length_one() {
        let mut store: FormStateStore<DietPlanDraft> = FormStateStore::open();
        store
            .update(DietPlanField::Meal(0, MealField::Name("Breakfast".into())))
            .expect("update should succeed");

        store
            .update(DietPlanField::RemoveMeal(0))
            .expect("update should succeed");

        assert_eq!(store.draft().meals.len(), 1);
        assert_eq!(store.draft().meals.items()[0].name, "Breakfast");
    }

    #[test]
    fn test_validation_requires_name_and_goal() {
        let mut store: FormStateStore<DietPlanDraft> = FormStateStore::open();
        store
            .update(DietPlanField::Name("Cutting Plan".into()))
            .expect("update should succeed");

        let errors = store.draft().validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for("goal"), Some(REQUIRED));

        store
            .update(DietPlanField::Goal("Weight Loss".into()))
            .expect("update should succeed");
        assert!(store.draft().validate().is_empty());
    }

    #[test]
    fn test_payload_shape() {
        let mut store: FormStateStore<DietPlanDraft> = FormStateStore::open();
        store
            .update(DietPlanField::Name("Bulk Plan".into()))
            .expect("update should succeed");
        store
            .update(DietPlanField::Goal("Muscle Gain".into()))
            .expect("update should succeed");
        store
            .update(DietPlanField::WaterLitres(Some(3.5)))
            .expect("update should succeed");

        let json = serde_json::to_value(store.draft()).expect("draft should serialise");
        assert_eq!(json["name"], "Bulk Plan");
        assert_eq!(json["goal"], "Muscle Gain");
        assert_eq!(json["waterLitres"], 3.5);
        assert_eq!(json["meals"][0]["carbsG"], serde_json::Value::Null);
    }
}
