use serde::{Deserialize, Serialize};

/// Demographic segment a size grid targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Female,
    Male,
    Kids,
}

impl Audience {
    pub const ALL: [Audience; 3] = [Audience::Female, Audience::Male, Audience::Kids];

    pub fn to_str(&self) -> &'static str {
        match self {
            Audience::Female => "female",
            Audience::Male => "male",
            Audience::Kids => "kids",
        }
    }
}

/// Kind of size grid within an audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeCategory {
    Standard,
    Plus,
    Numeric,
    Baby,
    KidsNumeric,
    Teen,
}

impl SizeCategory {
    pub fn to_str(&self) -> &'static str {
        match self {
            SizeCategory::Standard => "standard",
            SizeCategory::Plus => "plus",
            SizeCategory::Numeric => "numeric",
            SizeCategory::Baby => "baby",
            SizeCategory::KidsNumeric => "kids_numeric",
            SizeCategory::Teen => "teen",
        }
    }
}
