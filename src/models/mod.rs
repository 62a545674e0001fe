mod candle;
mod listing;

pub use candle::Candle;
pub use listing::{IpoPerformance, StockQuote, UpcomingIpo};
