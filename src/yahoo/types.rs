use crate::models::Candle;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: String,
    pub currency: Option<String>,
    pub regular_market_price: Option<f64>,
    pub chart_previous_close: Option<f64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteIndicators>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct QuoteIndicators {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

impl ChartResult {
    /// Flattens the column-oriented chart payload into candles. Rows with a
    /// missing open, high, low, or close are dropped.
    pub fn candles(&self) -> Vec<Candle> {
        let Some(quote) = self.indicators.quote.first() else {
            return Vec::new();
        };

        let mut candles = Vec::with_capacity(self.timestamp.len());
        for (i, &ts) in self.timestamp.iter().enumerate() {
            let (Some(open), Some(high), Some(low), Some(close)) = (
                value_at(&quote.open, i),
                value_at(&quote.high, i),
                value_at(&quote.low, i),
                value_at(&quote.close, i),
            ) else {
                continue;
            };
            candles.push(Candle {
                timestamp: ts as u64,
                open,
                high,
                low,
                close,
                volume: value_at(&quote.volume, i).unwrap_or(0),
            });
        }
        candles
    }
}

fn value_at<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote_response: QuoteBody,
}

#[derive(Deserialize, Debug, Clone)]
pub struct QuoteBody {
    #[serde(default)]
    pub result: Vec<TickerInfo>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TickerInfo {
    pub symbol: String,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
    pub market_cap: Option<u64>,
}

impl TickerInfo {
    /// Current price, falling back to the previous close. Zero prices are
    /// treated as absent.
    pub fn price(&self) -> Option<f64> {
        self.regular_market_price
            .filter(|p| *p != 0.0)
            .or(self.regular_market_previous_close.filter(|p| *p != 0.0))
    }

    pub fn company(&self) -> &str {
        self.long_name
            .as_deref()
            .or(self.short_name.as_deref())
            .unwrap_or("N/A")
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorBody {
    pub code: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHART_BODY: &str = r#"{
        "chart": {
            "result": [{
                "meta": {
                    "symbol": "SNOW",
                    "currency": "USD",
                    "regularMarketPrice": 245.0,
                    "chartPreviousClose": 120.0
                },
                "timestamp": [1600214400, 1600300800, 1600387200],
                "indicators": {
                    "quote": [{
                        "open": [245.0, null, 250.5],
                        "high": [260.0, 255.0, 252.0],
                        "low": [231.0, 240.0, 248.0],
                        "close": [253.93, 250.0, 251.0],
                        "volume": [36099900, null, null]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_chart_decodes_and_drops_null_rows() {
        let response: ChartResponse = serde_json::from_str(CHART_BODY).unwrap();
        let result = &response.chart.result.unwrap()[0];
        assert_eq!(result.meta.symbol, "SNOW");

        let candles = result.candles();
        // The middle row has a null open and must be dropped.
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].timestamp, 1600214400);
        assert_eq!(candles[0].open, 245.0);
        assert_eq!(candles[0].volume, 36099900);
        assert_eq!(candles[1].close, 251.0);
    }

    #[test]
    fn test_empty_chart_result_yields_no_candles() {
        let body = r#"{"chart": {"result": null, "error": null}}"#;
        let response: ChartResponse = serde_json::from_str(body).unwrap();
        assert!(response.chart.result.is_none());

        let empty = r#"{
            "chart": {
                "result": [{
                    "meta": {"symbol": "EXPA", "currency": null,
                             "regularMarketPrice": null, "chartPreviousClose": null},
                    "timestamp": [],
                    "indicators": {"quote": [{}]}
                }],
                "error": null
            }
        }"#;
        let response: ChartResponse = serde_json::from_str(empty).unwrap();
        assert!(response.chart.result.unwrap()[0].candles().is_empty());
    }

    #[test]
    fn test_missing_volume_defaults_to_zero() {
        let response: ChartResponse = serde_json::from_str(CHART_BODY).unwrap();
        let candles = response.chart.result.unwrap()[0].candles();
        // The kept third row has prices but a null volume.
        assert_eq!(candles[1].volume, 0);
    }

    #[test]
    fn test_ticker_price_fallback_and_zero_guard() {
        let mut info = TickerInfo {
            symbol: "AAPL".to_string(),
            long_name: Some("Apple Inc.".to_string()),
            short_name: None,
            regular_market_price: None,
            regular_market_previous_close: Some(189.5),
            market_cap: Some(2_900_000_000_000),
        };
        assert_eq!(info.price(), Some(189.5));

        info.regular_market_price = Some(190.25);
        assert_eq!(info.price(), Some(190.25));

        // A zero price is treated as absent and falls back to the previous close.
        info.regular_market_price = Some(0.0);
        assert_eq!(info.price(), Some(189.5));

        info.regular_market_previous_close = Some(0.0);
        assert_eq!(info.price(), None);

        assert_eq!(info.company(), "Apple Inc.");
        info.long_name = None;
        assert_eq!(info.company(), "N/A");
    }

    #[test]
    fn test_quote_response_decodes() {
        let body = r#"{
            "quoteResponse": {
                "result": [{
                    "symbol": "PLTR",
                    "longName": "Palantir Technologies Inc.",
                    "shortName": "Palantir",
                    "regularMarketPrice": 24.5,
                    "regularMarketPreviousClose": 23.9,
                    "marketCap": 52000000000
                }],
                "error": null
            }
        }"#;
        let response: QuoteResponse = serde_json::from_str(body).unwrap();
        let info = &response.quote_response.result[0];
        assert_eq!(info.symbol, "PLTR");
        assert_eq!(info.market_cap, Some(52000000000));
    }
}
