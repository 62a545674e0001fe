pub struct DataSourceGroup {
    pub category: &'static str,
    pub entries: &'static [&'static str],
}

pub fn data_sources() -> &'static [DataSourceGroup] {
    &[
        DataSourceGroup {
            category: "Free APIs",
            entries: &[
                "Yahoo Finance chart/quote endpoints",
                "Alpha Vantage - free tier available",
                "IEX Cloud - free tier available",
                "Finnhub - free tier available",
            ],
        },
        DataSourceGroup {
            category: "Paid Services",
            entries: &[
                "Bloomberg API",
                "Refinitiv (Reuters)",
                "Quandl",
                "Polygon.io",
            ],
        },
        DataSourceGroup {
            category: "Web Sources",
            entries: &[
                "SEC EDGAR filings",
                "NASDAQ IPO calendar",
                "NYSE IPO calendar",
                "IPO Scoop",
                "Renaissance Capital IPO ETF",
            ],
        },
    ]
}
