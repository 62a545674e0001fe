use crate::helpers::round_to_decimals;
use crate::models::{Candle, IpoPerformance, StockQuote, UpcomingIpo};
use chrono::DateTime;
use polars::prelude::*;

pub fn upcoming_frame(rows: &[UpcomingIpo]) -> PolarsResult<DataFrame> {
    df!(
        "Company" => rows.iter().map(|r| r.company.clone()).collect::<Vec<_>>(),
        "Symbol" => rows.iter().map(|r| r.symbol.clone()).collect::<Vec<_>>(),
        "Expected Date" => rows.iter().map(|r| r.expected_date.clone()).collect::<Vec<_>>(),
        "Price Range" => rows.iter().map(|r| r.price_range.clone()).collect::<Vec<_>>(),
        "Shares" => rows.iter().map(|r| r.shares.clone()).collect::<Vec<_>>(),
    )
}

pub fn performance_frame(rows: &[IpoPerformance]) -> PolarsResult<DataFrame> {
    df!(
        "Symbol" => rows.iter().map(|r| r.symbol.clone()).collect::<Vec<_>>(),
        "Company" => rows.iter().map(|r| r.company.clone()).collect::<Vec<_>>(),
        "IPO Price" => rows.iter().map(|r| r.ipo_price).collect::<Vec<_>>(),
        "Current Price" => rows.iter().map(|r| r.current_price).collect::<Vec<_>>(),
        "Performance (%)" => rows.iter().map(|r| r.change_pct).collect::<Vec<_>>(),
        "Days Since IPO" => rows.iter().map(|r| r.trading_days as u32).collect::<Vec<_>>(),
    )
}

pub fn quote_frame(rows: &[StockQuote]) -> PolarsResult<DataFrame> {
    df!(
        "Symbol" => rows.iter().map(|r| r.symbol.clone()).collect::<Vec<_>>(),
        "Company" => rows.iter().map(|r| r.company.clone()).collect::<Vec<_>>(),
        "Current Price" => rows.iter().map(|r| round_to_decimals(r.price, 2)).collect::<Vec<_>>(),
        "Market Cap" => rows.iter().map(|r| r.market_cap).collect::<Vec<Option<u64>>>(),
    )
}

pub fn history_frame(candles: &[Candle]) -> PolarsResult<DataFrame> {
    df!(
        "Date" => candles.iter().map(|c| format_date(c.timestamp)).collect::<Vec<_>>(),
        "Open" => candles.iter().map(|c| round_to_decimals(c.open, 2)).collect::<Vec<_>>(),
        "High" => candles.iter().map(|c| round_to_decimals(c.high, 2)).collect::<Vec<_>>(),
        "Low" => candles.iter().map(|c| round_to_decimals(c.low, 2)).collect::<Vec<_>>(),
        "Close" => candles.iter().map(|c| round_to_decimals(c.close, 2)).collect::<Vec<_>>(),
        "Volume" => candles.iter().map(|c| c.volume).collect::<Vec<_>>(),
    )
}

fn format_date(timestamp: u64) -> String {
    DateTime::from_timestamp(timestamp as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
