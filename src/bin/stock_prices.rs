use quotelab::report::{history_frame, quote_frame};
use quotelab::services::current_quotes;
use quotelab::yahoo::{HistoryRange, TickerClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Stock Price Checker ===");

    let client = TickerClient::new(None, None);

    let symbols = ["AAPL", "GOOGL", "MSFT", "TSLA"];
    println!("\n--- Popular Stock Prices ---");
    for symbol in symbols {
        match client.quote(symbol).await {
            Ok(info) => match info.price() {
                Some(price) => println!("{symbol}: ${price:.2}"),
                None => println!("No current price for {symbol}"),
            },
            Err(e) => println!("Error getting price for {symbol}: {e}"),
        }
    }

    println!("\n--- Recent IPO Stocks ---");
    let recent_ipos = ["PLTR", "SNOW", "DASH", "ABNB", "RBLX"];
    let rows = current_quotes(&client, &recent_ipos).await;
    if !rows.is_empty() {
        println!("{}", quote_frame(&rows)?);
    }

    println!("\n--- AAPL Recent History (Last 5 days) ---");
    match client.history("AAPL", HistoryRange::FiveDays).await {
        Ok(candles) if !candles.is_empty() => println!("{}", history_frame(&candles)?),
        Ok(_) => println!("No recent history available for AAPL"),
        Err(e) => println!("Error getting history for AAPL: {e}"),
    }

    Ok(())
}
