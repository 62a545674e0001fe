use crate::models::Candle;
use crate::yahoo::{
    errors::*, req::HttpClient, types::*, BaseUrl,
};
use chrono::{NaiveDate, NaiveTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;

const DAILY_INTERVAL: &str = "1d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRange {
    FiveDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    Max,
}

impl HistoryRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryRange::FiveDays => "5d",
            HistoryRange::OneMonth => "1mo",
            HistoryRange::ThreeMonths => "3mo",
            HistoryRange::SixMonths => "6mo",
            HistoryRange::OneYear => "1y",
            HistoryRange::Max => "max",
        }
    }
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug)]
pub struct TickerClient {
    pub http_client: HttpClient,
}

impl TickerClient {
    pub fn new(client: Option<Client>, base_url: Option<BaseUrl>) -> TickerClient {
        let client = client.unwrap_or_default();
        let base_url = base_url.unwrap_or(BaseUrl::Query1).get_url();

        TickerClient {
            http_client: HttpClient { client, base_url },
        }
    }

    async fn send_request<T: DeserializeOwned>(
        &self,
        url_path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let return_data = self.http_client.get(url_path, params).await?;
        serde_json::from_str(&return_data).map_err(|e| Error::JsonParse(e.to_string()))
    }

    pub async fn quote(&self, symbol: &str) -> Result<TickerInfo> {
        let params = [("symbols", symbol.to_string())];
        let response: QuoteResponse = self.send_request("/v7/finance/quote", &params).await?;

        if let Some(error) = response.quote_response.error {
            return Err(Error::Api {
                code: error.code,
                description: error.description,
            });
        }
        response
            .quote_response
            .result
            .into_iter()
            .find(|info| info.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| Error::SymbolNotFound(symbol.to_string()))
    }

    pub async fn history(&self, symbol: &str, range: HistoryRange) -> Result<Vec<Candle>> {
        let params = [
            ("range", range.to_string()),
            ("interval", DAILY_INTERVAL.to_string()),
        ];
        self.chart(symbol, &params).await
    }

    pub async fn history_since(&self, symbol: &str, start: NaiveDate) -> Result<Vec<Candle>> {
        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let period2 = Utc::now().timestamp();
        let params = [
            ("period1", period1.to_string()),
            ("period2", period2.to_string()),
            ("interval", DAILY_INTERVAL.to_string()),
        ];
        self.chart(symbol, &params).await
    }

    async fn chart(&self, symbol: &str, params: &[(&str, String)]) -> Result<Vec<Candle>> {
        let url_path = format!("/v8/finance/chart/{symbol}");
        let response: ChartResponse = self.send_request(&url_path, params).await?;

        if let Some(error) = response.chart.error {
            return Err(Error::Api {
                code: error.code,
                description: error.description,
            });
        }

        // An empty result set is not an error; callers render an empty table.
        let result = response.chart.result.unwrap_or_default();
        Ok(result.first().map(ChartResult::candles).unwrap_or_default())
    }
}
