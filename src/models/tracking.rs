// ABOUTME: Intake, weight, and measurement tracking models keyed by calendar date
// ABOUTME: MealType, LoggedEntry, DailyLog with aggregated totals, settings and checklist types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Slot in the day a food entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Snack between breakfast and lunch
    MorningSnack,
    /// Lunch meal
    Lunch,
    /// Snack between lunch and dinner
    AfternoonSnack,
    /// Dinner meal
    Dinner,
    /// Snack after dinner
    LateSnack,
}

impl MealType {
    /// All meal slots in day order
    pub const ALL: [Self; 6] = [
        Self::Breakfast,
        Self::MorningSnack,
        Self::Lunch,
        Self::AfternoonSnack,
        Self::Dinner,
        Self::LateSnack,
    ];

    /// Parse a meal type from a display string, falling back to lunch
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "morning snack" | "morning_snack" => Self::MorningSnack,
            "afternoon snack" | "afternoon_snack" => Self::AfternoonSnack,
            "dinner" => Self::Dinner,
            "late snack" | "late_snack" => Self::LateSnack,
            _ => Self::Lunch,
        }
    }

    /// Display label for the slot
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::MorningSnack => "Morning Snack",
            Self::Lunch => "Lunch",
            Self::AfternoonSnack => "Afternoon Snack",
            Self::Dinner => "Dinner",
            Self::LateSnack => "Late Snack",
        }
    }
}

/// One food item the user logged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedEntry {
    /// Unique id for this specific logged entry
    pub id: String,
    /// Name of the logged food
    pub food_item_name: String,
    /// Meal slot this entry belongs to
    pub meal_type: MealType,
    /// Quantity in grams
    pub quantity: f64,
    /// Calories (kcal) for the logged quantity
    pub calories: f64,
    /// Protein (g) for the logged quantity
    pub protein: f64,
    /// Fiber (g) for the logged quantity
    pub fiber: f64,
    /// Total fat (g), if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Mono plus polyunsaturated fats (g), if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_fats: Option<f64>,
    /// Saturated plus trans fats (g), if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unhealthy_fats: Option<f64>,
    /// Carbohydrates (g), if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Sugars (g), if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
}

/// All entries for one calendar day plus aggregated totals.
///
/// Totals are denormalized so the UI can render progress without walking
/// the entry list; [`DailyLog::recompute_totals`] keeps them consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Calendar day this log covers
    pub date: NaiveDate,
    /// All individual food entries for the day
    pub entries: Vec<LoggedEntry>,
    /// Sum of entry calories (kcal)
    pub total_calories: f64,
    /// Sum of entry protein (g)
    pub total_protein: f64,
    /// Sum of entry fiber (g)
    pub total_fiber: f64,
    /// Sum of entry fat (g), absent components count as 0
    pub total_fat: f64,
    /// Sum of entry healthy fats (g), absent components count as 0
    pub total_healthy_fats: f64,
    /// Sum of entry unhealthy fats (g), absent components count as 0
    pub total_unhealthy_fats: f64,
    /// Sum of entry carbs (g), absent components count as 0
    pub total_carbs: f64,
    /// Sum of entry sugar (g), absent components count as 0
    pub total_sugar: f64,
}

impl DailyLog {
    /// Create an empty log for the given day
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            total_calories: 0.0,
            total_protein: 0.0,
            total_fiber: 0.0,
            total_fat: 0.0,
            total_healthy_fats: 0.0,
            total_unhealthy_fats: 0.0,
            total_carbs: 0.0,
            total_sugar: 0.0,
        }
    }

    /// Append an entry and update the aggregated totals
    pub fn add_entry(&mut self, entry: LoggedEntry) {
        self.entries.push(entry);
        self.recompute_totals();
    }

    /// Remove the entry with the given id, if present, and update totals.
    /// Returns true when an entry was removed.
    pub fn remove_entry(&mut self, entry_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != entry_id);
        let removed = self.entries.len() != before;
        if removed {
            self.recompute_totals();
        }
        removed
    }

    /// Recompute all aggregated totals from the entry list
    pub fn recompute_totals(&mut self) {
        self.total_calories = self.entries.iter().map(|e| e.calories).sum();
        self.total_protein = self.entries.iter().map(|e| e.protein).sum();
        self.total_fiber = self.entries.iter().map(|e| e.fiber).sum();
        self.total_fat = self.entries.iter().filter_map(|e| e.fat).sum();
        self.total_healthy_fats = self.entries.iter().filter_map(|e| e.healthy_fats).sum();
        self.total_unhealthy_fats = self.entries.iter().filter_map(|e| e.unhealthy_fats).sum();
        self.total_carbs = self.entries.iter().filter_map(|e| e.carbs).sum();
        self.total_sugar = self.entries.iter().filter_map(|e| e.sugar).sum();
    }
}

/// User profile and daily targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Display name
    pub name: String,
    /// Daily calorie target (kcal)
    pub daily_calorie_target: f64,
    /// Daily protein target (g)
    pub daily_protein_target: f64,
    /// Daily fiber target (g)
    pub daily_fiber_target: f64,
    /// Local reminder time, e.g. "09:00"
    pub reminder_time: String,
    /// Whether the local reminder timer is active
    pub reminders_enabled: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            name: "User".into(),
            daily_calorie_target: 2000.0,
            daily_protein_target: 75.0,
            daily_fiber_target: 30.0,
            reminder_time: "09:00".into(),
            reminders_enabled: false,
        }
    }
}

/// One weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightLog {
    /// Day the measurement was taken
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight: f64,
}

/// One body measurement entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMeasurementLog {
    /// Day the measurement was taken
    pub date: NaiveDate,
    /// Waist circumference in centimeters, if measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_size_cm: Option<f64>,
}

/// One item on the daily habit checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Stable item id
    pub id: String,
    /// Display text
    pub text: String,
    /// Whether the user checked it off today
    pub completed: bool,
}

/// The habit checklist for one day; resets each calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyChecklist {
    /// Calendar day, to ensure daily reset
    pub date: NaiveDate,
    /// Checklist items
    pub items: Vec<ChecklistItem>,
}

impl DailyChecklist {
    /// Fresh checklist with the stock items, all unchecked
    #[must_use]
    pub fn with_default_items(date: NaiveDate) -> Self {
        let items = [
            ("protein", "Fuel with Protein Power"),
            ("fiber", "Fiber Up for Gut Health"),
            ("meals", "Nourish with Regular Meals"),
            ("steps", "Step into Wellness (5000+ steps)"),
            ("water", "Hydration Hero (Drink plenty of water)"),
            ("movement", "Mindful Movement Moment"),
        ]
        .into_iter()
        .map(|(id, text)| ChecklistItem {
            id: id.into(),
            text: text.into(),
            completed: false,
        })
        .collect();
        Self { date, items }
    }
}

/// Preference input for generated meal suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestionPreferences {
    /// Calorie ceiling per suggested meal (kcal)
    pub calorie_limit: f64,
    /// Free-text dietary preferences, may be empty
    pub dietary_preferences: String,
    /// Comma-separated foods to avoid, may be empty
    pub avoid_foods: String,
}
