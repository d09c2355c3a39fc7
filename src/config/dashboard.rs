//! Dashboard baseline configuration
//!
//! Headcounts and donation totals that are not derived from any collection.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::dashboard::{DashboardBaseline, MonthlyGrowth};

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_teachers")]
    pub teachers: u32,

    #[serde(default = "default_doctors")]
    pub doctors: u32,

    #[serde(default = "default_volunteers")]
    pub volunteers: u32,

    #[serde(default = "default_donations")]
    pub donations: Decimal,

    #[serde(default = "default_student_growth")]
    pub student_growth_pct: f64,

    #[serde(default = "default_donation_growth")]
    pub donation_growth_pct: f64,
}

impl DashboardConfig {
    pub fn baseline(&self) -> DashboardBaseline {
        DashboardBaseline {
            teachers: self.teachers,
            doctors: self.doctors,
            volunteers: self.volunteers,
            donations: self.donations,
            growth: MonthlyGrowth {
                students: self.student_growth_pct,
                donations: self.donation_growth_pct,
            },
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            teachers: default_teachers(),
            doctors: default_doctors(),
            volunteers: default_volunteers(),
            donations: default_donations(),
            student_growth_pct: default_student_growth(),
            donation_growth_pct: default_donation_growth(),
        }
    }
}

fn default_teachers() -> u32 {
    12
}

fn default_doctors() -> u32 {
    8
}

fn default_volunteers() -> u32 {
    45
}

fn default_donations() -> Decimal {
    Decimal::new(1_250_000, 0)
}

fn default_student_growth() -> f64 {
    15.5
}

fn default_donation_growth() -> f64 {
    8.3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_baseline() {
        assert_eq!(DashboardConfig::default().baseline(), DashboardBaseline::default());
    }
}
