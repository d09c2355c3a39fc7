pub mod stats;

pub use stats::{CollectionCounts, DashboardBaseline, DashboardStats, MonthlyGrowth};
