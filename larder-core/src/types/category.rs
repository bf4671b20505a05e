/// Top-level tag categories
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of top-level tag groupings.
///
/// The serialized form is the wire token used as the first segment of every
/// [`TagId`](super::TagId) (`mainIngredient`, `cookingMethod`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Category {
    Cuisine,
    MealType,
    Course,
    DishType,
    Dietary,
    CookingMethod,
    MainIngredient,
    Season,
    Planning,
    Difficulty,
    Characteristics,
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 12] = [
        Self::Cuisine,
        Self::MealType,
        Self::Course,
        Self::DishType,
        Self::Dietary,
        Self::CookingMethod,
        Self::MainIngredient,
        Self::Season,
        Self::Planning,
        Self::Difficulty,
        Self::Characteristics,
        Self::Other,
    ];

    /// Wire token, as it appears in the first segment of a tag id
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cuisine => "cuisine",
            Self::MealType => "mealType",
            Self::Course => "course",
            Self::DishType => "dishType",
            Self::Dietary => "dietary",
            Self::CookingMethod => "cookingMethod",
            Self::MainIngredient => "mainIngredient",
            Self::Season => "season",
            Self::Planning => "planning",
            Self::Difficulty => "difficulty",
            Self::Characteristics => "characteristics",
            Self::Other => "other",
        }
    }

    /// English display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cuisine => "Cuisine",
            Self::MealType => "Meal Type",
            Self::Course => "Course",
            Self::DishType => "Dish Type",
            Self::Dietary => "Dietary",
            Self::CookingMethod => "Cooking Method",
            Self::MainIngredient => "Main Ingredient",
            Self::Season => "Season",
            Self::Planning => "Planning",
            Self::Difficulty => "Difficulty",
            Self::Characteristics => "Characteristics",
            Self::Other => "Other",
        }
    }

    /// Strict lookup by wire token (case-sensitive)
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == token)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts wire tokens and loose spellings such as "Main Ingredient" or "main_ingredient"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == squashed)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_tokens_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_token(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_token("MainIngredient"), None);
    }

    #[test]
    fn test_loose_parsing() {
        assert_eq!("main ingredient".parse::<Category>(), Ok(Category::MainIngredient));
        assert_eq!("main_ingredient".parse::<Category>(), Ok(Category::MainIngredient));
        assert_eq!("Difficulty".parse::<Category>(), Ok(Category::Difficulty));
        assert!("dessert".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_token() {
        let json = serde_json::to_string(&Category::CookingMethod).unwrap();
        assert_eq!(json, "\"cookingMethod\"");

        let parsed: Category = serde_json::from_str("\"mealType\"").unwrap();
        assert_eq!(parsed, Category::MealType);
    }
}
