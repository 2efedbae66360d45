use serde::{Deserialize, Serialize};
use std::fmt;

/// Meal slot a kitchen list is generated for.
/// The wire form (`"Lunch"` / `"Dinner"`) is what the remote sheet expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MealType {
    #[default]
    Lunch,
    Dinner,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }

    /// Helper: convert input from CLI (any case, e.g. "lunch", "DINNER", "L")
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "lunch" | "l" => Some(MealType::Lunch),
            "dinner" | "d" => Some(MealType::Dinner),
            _ => None,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
