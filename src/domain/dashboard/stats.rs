use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary counters shown on the dashboard screen.
///
/// Never stored. Built from the live collections on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub total_teachers: u32,
    pub total_doctors: u32,
    pub total_volunteers: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_donations: Decimal,
    pub total_centers: usize,
    pub total_scholars: usize,
    pub total_patients: usize,
    pub total_opd_events: usize,
    /// Sum of amounts for scholars whose status is awarded
    #[serde(with = "rust_decimal::serde::float")]
    pub total_awarded_amount: Decimal,
    pub monthly_growth: MonthlyGrowth,
}

/// Month-over-month growth, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyGrowth {
    pub students: f64,
    pub donations: f64,
}

/// Figures that are configured rather than counted.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardBaseline {
    pub teachers: u32,
    pub doctors: u32,
    pub volunteers: u32,
    pub donations: Decimal,
    pub growth: MonthlyGrowth,
}

impl Default for DashboardBaseline {
    fn default() -> Self {
        Self {
            teachers: 12,
            doctors: 8,
            volunteers: 45,
            donations: Decimal::new(1_250_000, 0),
            growth: MonthlyGrowth {
                students: 15.5,
                donations: 8.3,
            },
        }
    }
}

/// Current sizes of the record collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionCounts {
    pub students: usize,
    pub centers: usize,
    pub scholars: usize,
    pub patients: usize,
    pub opd_events: usize,
    pub awarded_amount: Decimal,
}

impl DashboardStats {
    pub fn project(counts: &CollectionCounts, baseline: &DashboardBaseline) -> Self {
        Self {
            total_students: counts.students,
            total_teachers: baseline.teachers,
            total_doctors: baseline.doctors,
            total_volunteers: baseline.volunteers,
            total_donations: baseline.donations,
            total_centers: counts.centers,
            total_scholars: counts.scholars,
            total_patients: counts.patients,
            total_opd_events: counts.opd_events,
            total_awarded_amount: counts.awarded_amount,
            monthly_growth: baseline.growth,
        }
    }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
