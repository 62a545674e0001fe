use chrono::NaiveDate;
use quotelab::report::{performance_frame, upcoming_frame};
use quotelab::services::{analyze_ipos, data_sources, upcoming_ipos};
use quotelab::yahoo::TickerClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== IPO Stock Analysis Tool ===");

    println!("\n--- Upcoming IPOs ---");
    let upcoming = upcoming_ipos();
    if !upcoming.is_empty() {
        println!("{}", upcoming_frame(&upcoming)?);
    }

    println!("\n--- Recent IPO Performance Analysis ---");
    let ipo_dates = [
        ("SNOW", "2020-09-16"), // Snowflake
        ("PLTR", "2020-09-30"), // Palantir
        ("RBLX", "2021-03-10"), // Roblox
    ];
    let mut listings = Vec::with_capacity(ipo_dates.len());
    for (symbol, date) in ipo_dates {
        listings.push((symbol, NaiveDate::parse_from_str(date, "%Y-%m-%d")?));
    }

    let client = TickerClient::new(None, None);
    let rows = analyze_ipos(&client, &listings).await;
    if !rows.is_empty() {
        println!("{}", performance_frame(&rows)?);
    }

    println!("\n--- Financial Data Sources ---");
    for group in data_sources() {
        println!("\n{}:", group.category);
        for entry in group.entries {
            println!("  - {entry}");
        }
    }

    Ok(())
}
