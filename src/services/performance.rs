use crate::helpers::round_to_decimals;
use crate::models::{Candle, IpoPerformance, StockQuote};
use crate::yahoo::{self, HistoryRange, TickerClient, TickerInfo};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::{error, info};

/// Seam over the market-data provider so the row-building loops can be
/// exercised against a stub.
#[async_trait]
pub trait MarketData {
    async fn quote(&self, symbol: &str) -> yahoo::Result<TickerInfo>;
    async fn history(&self, symbol: &str, range: HistoryRange) -> yahoo::Result<Vec<Candle>>;
    async fn history_since(&self, symbol: &str, start: NaiveDate) -> yahoo::Result<Vec<Candle>>;
}

#[async_trait]
impl MarketData for TickerClient {
    async fn quote(&self, symbol: &str) -> yahoo::Result<TickerInfo> {
        TickerClient::quote(self, symbol).await
    }

    async fn history(&self, symbol: &str, range: HistoryRange) -> yahoo::Result<Vec<Candle>> {
        TickerClient::history(self, symbol, range).await
    }

    async fn history_since(&self, symbol: &str, start: NaiveDate) -> yahoo::Result<Vec<Candle>> {
        TickerClient::history_since(self, symbol, start).await
    }
}

/// Percentage change from `baseline` to `current`. Returns `None` when either
/// side is zero.
pub fn percent_change(baseline: f64, current: f64) -> Option<f64> {
    if baseline == 0.0 || current == 0.0 {
        return None;
    }
    Some((current - baseline) / baseline * 100.0)
}

pub fn performance_from(
    symbol: &str,
    info: &TickerInfo,
    candles: &[Candle],
) -> Option<IpoPerformance> {
    let first = candles.first()?;
    let current = info.price()?;
    let change = percent_change(first.open, current)?;

    Some(IpoPerformance {
        symbol: symbol.to_string(),
        company: info.company().to_string(),
        ipo_price: round_to_decimals(first.open, 2),
        current_price: round_to_decimals(current, 2),
        change_pct: round_to_decimals(change, 2),
        trading_days: candles.len(),
    })
}

pub async fn ipo_performance(
    provider: &dyn MarketData,
    symbol: &str,
    ipo_date: NaiveDate,
) -> yahoo::Result<Option<IpoPerformance>> {
    let candles = provider.history_since(symbol, ipo_date).await?;
    if candles.is_empty() {
        return Ok(None);
    }
    let info = provider.quote(symbol).await?;
    Ok(performance_from(symbol, &info, &candles))
}

/// One row per listing that produced usable data. Failures are logged and the
/// row dropped; later listings are always still processed.
pub async fn analyze_ipos(
    provider: &dyn MarketData,
    listings: &[(&str, NaiveDate)],
) -> Vec<IpoPerformance> {
    let mut rows = Vec::new();
    for (symbol, ipo_date) in listings {
        match ipo_performance(provider, symbol, *ipo_date).await {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => info!("no usable price data for {symbol}, skipping"),
            Err(e) => error!("error analyzing {symbol}: {e}"),
        }
    }
    rows
}

pub async fn current_quotes(provider: &dyn MarketData, symbols: &[&str]) -> Vec<StockQuote> {
    let mut rows = Vec::new();
    for symbol in symbols {
        match provider.quote(symbol).await {
            Ok(ref info) => match info.price() {
                Some(price) => rows.push(StockQuote {
                    symbol: symbol.to_string(),
                    company: info.company().to_string(),
                    price,
                    market_cap: info.market_cap,
                }),
                None => info!("no current price for {symbol}, skipping"),
            },
            Err(e) => error!("error getting price for {symbol}: {e}"),
        }
    }
    rows
}
