//! Industry-average reference table.
//!
//! The table ships inside the binary (`data/benchmarks.json`) and is parsed
//! once at startup. After that it is only ever read through shared references.

use super::{Category, PlanType, Region};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const BUILTIN_TABLE: &str = include_str!("../../data/benchmarks.json");

/// Conversion funnel rates for one category, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionBenchmark {
    pub install_trial: f64,
    pub trial_paid: f64,
    pub install_paid: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTable {
    conversion: HashMap<Category, ConversionBenchmark>,
    pricing: HashMap<PlanType, HashMap<Region, f64>>,
    ltv: HashMap<Category, HashMap<PlanType, f64>>,
    refund_rate: HashMap<Category, f64>,
}

impl ReferenceTable {
    /// Parse the table compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_TABLE).context("Failed to parse built-in benchmark table")
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let table: ReferenceTable = serde_json::from_str(raw)?;
        Ok(table)
    }

    pub fn price(&self, plan_type: Option<PlanType>, region: Option<Region>) -> Option<f64> {
        self.pricing.get(&plan_type?)?.get(&region?).copied()
    }

    /// Trial->paid rate when the app offers a trial, install->paid otherwise.
    pub fn conversion(&self, category: Option<Category>, has_trial: bool) -> Option<f64> {
        let funnel = self.conversion.get(&category?)?;
        Some(if has_trial {
            funnel.trial_paid
        } else {
            funnel.install_paid
        })
    }

    pub fn ltv(&self, category: Option<Category>, plan_type: Option<PlanType>) -> Option<f64> {
        self.ltv.get(&category?)?.get(&plan_type?).copied()
    }

    pub fn refund_rate(&self, category: Option<Category>) -> Option<f64> {
        self.refund_rate.get(&category?).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_covers_every_known_key() {
        let table = ReferenceTable::builtin().unwrap();

        for category in Category::ALL {
            assert!(table.conversion(Some(category), true).is_some(), "{category}");
            assert!(table.conversion(Some(category), false).is_some(), "{category}");
            assert!(table.refund_rate(Some(category)).is_some(), "{category}");
            for plan in PlanType::ALL {
                assert!(table.ltv(Some(category), Some(plan)).is_some());
            }
        }
        for plan in PlanType::ALL {
            for region in Region::ALL {
                assert!(table.price(Some(plan), Some(region)).is_some());
            }
        }
    }

    #[test]
    fn lookups_use_the_expected_keys() {
        let table = ReferenceTable::builtin().unwrap();

        assert_eq!(table.price(Some(PlanType::Monthly), Some(Region::US)), Some(15.2));
        assert_eq!(table.price(Some(PlanType::Annual), Some(Region::LATAM)), Some(31.9));
        assert_eq!(table.conversion(Some(Category::Education), true), Some(29.31));
        assert_eq!(table.conversion(Some(Category::Education), false), Some(0.83));
        assert_eq!(
            table.ltv(Some(Category::PhotoVideo), Some(PlanType::Monthly)),
            Some(53.2)
        );
        assert_eq!(table.refund_rate(Some(Category::Productivity)), Some(2.7));
    }

    #[test]
    fn missing_keys_resolve_to_none() {
        let table = ReferenceTable::builtin().unwrap();

        assert_eq!(table.price(None, Some(Region::US)), None);
        assert_eq!(table.price(Some(PlanType::Weekly), None), None);
        assert_eq!(table.conversion(None, true), None);
        assert_eq!(table.ltv(Some(Category::Lifestyle), None), None);
        assert_eq!(table.refund_rate(None), None);
    }

    #[test]
    fn rejects_a_table_with_unknown_keys() {
        let raw = r#"{"conversion":{},"pricing":{"daily":{}},"ltv":{},"refundRate":{}}"#;
        assert!(ReferenceTable::from_json(raw).is_err());
    }
}
