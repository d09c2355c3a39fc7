#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::dashboard::stats::{CollectionCounts, DashboardBaseline, DashboardStats};

    #[test]
    fn test_projection_takes_counts_from_collections() {
        let counts = CollectionCounts {
            students: 2,
            centers: 2,
            scholars: 3,
            patients: 7,
            opd_events: 1,
            awarded_amount: Decimal::new(15000, 0),
        };

        let stats = DashboardStats::project(&counts, &DashboardBaseline::default());

        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.total_centers, 2);
        assert_eq!(stats.total_scholars, 3);
        assert_eq!(stats.total_patients, 7);
        assert_eq!(stats.total_opd_events, 1);
        assert_eq!(stats.total_awarded_amount, Decimal::new(15000, 0));
    }

    #[test]
    fn test_projection_takes_headcounts_from_baseline() {
        let stats = DashboardStats::project(&CollectionCounts::default(), &DashboardBaseline::default());

        assert_eq!(stats.total_teachers, 12);
        assert_eq!(stats.total_doctors, 8);
        assert_eq!(stats.total_volunteers, 45);
        assert_eq!(stats.total_donations, Decimal::new(1_250_000, 0));
        assert_eq!(stats.monthly_growth.students, 15.5);
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let stats = DashboardStats::project(&CollectionCounts::default(), &DashboardBaseline::default());
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["totalStudents"], 0);
        assert_eq!(json["totalDonations"], serde_json::json!(1250000.0));
        assert_eq!(json["monthlyGrowth"]["donations"], serde_json::json!(8.3));
    }
}
