// goal.rs — Goal: one user-tracked objective.
//
// A Goal is almost entirely immutable: `completed` is the only field any
// operation after creation ever touches. The two fixed enumerations
// (Category, ColorTag) mirror the choices the add-goal form offers;
// ColorTag is purely cosmetic and has no behavioral effect.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GoalError;

/// Opaque goal identifier.
///
/// Assigned once at creation by an [`IdSource`](crate::ids::IdSource),
/// stable for the goal's lifetime, never reused within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GoalId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The fixed category set offered by the add-goal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HealthFitness,
    Career,
    Finance,
    Learning,
    Relationships,
    Creativity,
    Travel,
    PersonalGrowth,
}

impl Category {
    /// All categories, in the order the form presents them.
    pub const ALL: [Category; 8] = [
        Category::HealthFitness,
        Category::Career,
        Category::Finance,
        Category::Learning,
        Category::Relationships,
        Category::Creativity,
        Category::Travel,
        Category::PersonalGrowth,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HealthFitness => "Health & Fitness",
            Category::Career => "Career",
            Category::Finance => "Finance",
            Category::Learning => "Learning",
            Category::Relationships => "Relationships",
            Category::Creativity => "Creativity",
            Category::Travel => "Travel",
            Category::PersonalGrowth => "Personal Growth",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = GoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| GoalError::UnknownCategory(s.to_string()))
    }
}

/// Presentational color tag for a goal card. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Sunset,
    Ocean,
    Ember,
    Meadow,
    Blossom,
    Twilight,
    Sky,
    Lime,
}

impl ColorTag {
    /// The full palette, in the order the form presents it.
    pub const ALL: [ColorTag; 8] = [
        ColorTag::Sunset,
        ColorTag::Ocean,
        ColorTag::Ember,
        ColorTag::Meadow,
        ColorTag::Blossom,
        ColorTag::Twilight,
        ColorTag::Sky,
        ColorTag::Lime,
    ];
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorTag::Sunset => "sunset",
            ColorTag::Ocean => "ocean",
            ColorTag::Ember => "ember",
            ColorTag::Meadow => "meadow",
            ColorTag::Blossom => "blossom",
            ColorTag::Twilight => "twilight",
            ColorTag::Sky => "sky",
            ColorTag::Lime => "lime",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorTag {
    type Err = GoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorTag::ALL
            .iter()
            .copied()
            .find(|c| c.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| GoalError::UnknownColor(s.to_string()))
    }
}

/// The active view filter over the goal collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Whether `goal` is visible under this filter.
    pub fn matches(&self, goal: &Goal) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !goal.completed,
            FilterMode::Completed => goal.completed,
        }
    }

    /// Next filter in tab-cycling order: All → Active → Completed → All.
    pub fn next(&self) -> FilterMode {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::All => write!(f, "all"),
            FilterMode::Active => write!(f, "active"),
            FilterMode::Completed => write!(f, "completed"),
        }
    }
}

/// One user-tracked objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, stable for the goal's lifetime.
    pub id: GoalId,

    /// Non-empty title (enforced at creation).
    pub title: String,

    /// Free-text description, may be empty.
    pub description: String,

    /// One of the fixed category set.
    pub category: Category,

    /// Presentational color tag.
    pub color: ColorTag,

    /// Completion state. The only field mutated after creation.
    pub completed: bool,

    /// When this goal was created.
    pub created_at: DateTime<Utc>,
}

/// The fields a caller supplies when adding a goal.
///
/// Everything else (`id`, `completed`, `created_at`) is assigned by the
/// store at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub color: ColorTag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display_matches_form_labels() {
        assert_eq!(Category::HealthFitness.to_string(), "Health & Fitness");
        assert_eq!(Category::PersonalGrowth.to_string(), "Personal Growth");
        assert_eq!(Category::Learning.to_string(), "Learning");
    }

    #[test]
    fn category_parse_round_trip() {
        for cat in Category::ALL {
            let parsed: Category = cat.to_string().parse().unwrap();
            assert_eq!(parsed, cat);
        }
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        let parsed: Category = "learning".parse().unwrap();
        assert_eq!(parsed, Category::Learning);
    }

    #[test]
    fn category_parse_unknown_returns_error() {
        let result = "Gardening".parse::<Category>();
        assert!(matches!(result, Err(GoalError::UnknownCategory(_))));
    }

    #[test]
    fn color_parse_round_trip() {
        for color in ColorTag::ALL {
            let parsed: ColorTag = color.to_string().parse().unwrap();
            assert_eq!(parsed, color);
        }
    }

    #[test]
    fn filter_matches_by_completion() {
        let mut goal = Goal {
            id: GoalId::from("1"),
            title: "Run a Marathon".to_string(),
            description: String::new(),
            category: Category::HealthFitness,
            color: ColorTag::Sunset,
            completed: false,
            created_at: Utc::now(),
        };

        assert!(FilterMode::All.matches(&goal));
        assert!(FilterMode::Active.matches(&goal));
        assert!(!FilterMode::Completed.matches(&goal));

        goal.completed = true;
        assert!(FilterMode::All.matches(&goal));
        assert!(!FilterMode::Active.matches(&goal));
        assert!(FilterMode::Completed.matches(&goal));
    }

    #[test]
    fn filter_cycle_visits_all_modes() {
        let start = FilterMode::All;
        assert_eq!(start.next(), FilterMode::Active);
        assert_eq!(start.next().next(), FilterMode::Completed);
        assert_eq!(start.next().next().next(), FilterMode::All);
    }

    #[test]
    fn goal_id_serializes_transparently() {
        let id = GoalId::from("42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");
        let restored: GoalId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, id);
    }
}
