#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrl {
    Query1,
    Query2,
}

impl BaseUrl {
    pub fn get_url(&self) -> String {
        match self {
            BaseUrl::Query1 => "https://query1.finance.yahoo.com".to_string(),
            BaseUrl::Query2 => "https://query2.finance.yahoo.com".to_string(),
        }
    }
}
