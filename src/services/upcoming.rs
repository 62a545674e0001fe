use crate::models::UpcomingIpo;

/// Mocked upcoming listings. Calendar feeds need an API key, so the tool
/// ships a fixed demonstration set.
pub fn upcoming_ipos() -> Vec<UpcomingIpo> {
    vec![
        UpcomingIpo {
            company: "Example Corp A".to_string(),
            symbol: "EXPA".to_string(),
            expected_date: "2025-08-15".to_string(),
            price_range: "$15-18".to_string(),
            shares: "10M".to_string(),
        },
        UpcomingIpo {
            company: "Tech Startup B".to_string(),
            symbol: "TSUB".to_string(),
            expected_date: "2025-08-22".to_string(),
            price_range: "$20-25".to_string(),
            shares: "8M".to_string(),
        },
    ]
}
