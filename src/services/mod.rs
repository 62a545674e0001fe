mod performance;
mod sources;
mod upcoming;

pub use performance::{
    analyze_ipos, current_quotes, ipo_performance, percent_change, performance_from, MarketData,
};
pub use sources::{data_sources, DataSourceGroup};
pub use upcoming::upcoming_ipos;
