#[derive(Debug, Clone)]
pub struct UpcomingIpo {
    pub company: String,
    pub symbol: String,
    pub expected_date: String,
    pub price_range: String,
    pub shares: String,
}

#[derive(Debug, Clone)]
pub struct IpoPerformance {
    pub symbol: String,
    pub company: String,
    pub ipo_price: f64,
    pub current_price: f64,
    pub change_pct: f64,
    pub trading_days: usize,
}

#[derive(Debug, Clone)]
pub struct StockQuote {
    pub symbol: String,
    pub company: String,
    pub price: f64,
    pub market_cap: Option<u64>,
}
