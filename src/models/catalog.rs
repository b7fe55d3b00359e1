use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// App store category a benchmark row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Education,
    #[serde(rename = "Health & Fitness")]
    HealthFitness,
    Lifestyle,
    #[serde(rename = "Photo & Video")]
    PhotoVideo,
    Productivity,
    Utilities,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Education,
        Category::HealthFitness,
        Category::Lifestyle,
        Category::PhotoVideo,
        Category::Productivity,
        Category::Utilities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "Education",
            Category::HealthFitness => "Health & Fitness",
            Category::Lifestyle => "Lifestyle",
            Category::PhotoVideo => "Photo & Video",
            Category::Productivity => "Productivity",
            Category::Utilities => "Utilities",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    US,
    Europe,
    APAC,
    LATAM,
    MEA,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::US,
        Region::Europe,
        Region::APAC,
        Region::LATAM,
        Region::MEA,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::US => "US",
            Region::Europe => "Europe",
            Region::APAC => "APAC",
            Region::LATAM => "LATAM",
            Region::MEA => "MEA",
        }
    }
}

/// Billing cadence of the subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Weekly,
    Monthly,
    Annual,
}

impl PlanType {
    pub const ALL: [PlanType; 3] = [PlanType::Weekly, PlanType::Monthly, PlanType::Annual];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Weekly => "weekly",
            PlanType::Monthly => "monthly",
            PlanType::Annual => "annual",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown benchmark key: {}", self.0)
    }
}

macro_rules! catalog_key {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|key| key.as_str() == s)
                    .ok_or_else(|| UnknownKey(s.to_string()))
            }
        }
    };
}

catalog_key!(Category);
catalog_key!(Region);
catalog_key!(PlanType);
