/// One rental property row from the `properties` table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing {
    pub name: String,
    pub station: String,
    /// Monthly rent in yen.
    pub price: i64,
    /// Building age in years.
    pub age: i64,
    pub floor_plan: String,
}

/// The five display strings shown for a listing in the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCells {
    pub name: String,
    pub station: String,
    pub price: String,
    pub age: String,
    pub floor_plan: String,
}

impl From<&Listing> for ListingCells {
    fn from(l: &Listing) -> Self {
        Self {
            name: l.name.clone(),
            station: l.station.clone(),
            price: format_price(l.price),
            age: format_age(l.age),
            floor_plan: l.floor_plan.clone(),
        }
    }
}

/// `85000` -> `"85,000円"`
pub fn format_price(yen: i64) -> String {
    format!("{}円", group_thousands(yen))
}

/// `12` -> `"築12年"`
pub fn format_age(years: i64) -> String {
    format!("築{years}年")
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Outcome of a listings search, as shown in the status line above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// Unfiltered first page.
    All { shown: usize, total: i64 },
    Found(usize),
    NoResults,
    Failed(String),
}

impl SearchStatus {
    pub fn for_results(keyword: &str, shown: usize, total: i64) -> Self {
        if keyword.is_empty() {
            SearchStatus::All { shown, total }
        } else if shown == 0 {
            SearchStatus::NoResults
        } else {
            SearchStatus::Found(shown)
        }
    }

    pub fn message(&self) -> String {
        match self {
            SearchStatus::All { shown, total } => {
                format!("全データ表示中（最新{shown}件 / 全{total}件）")
            }
            SearchStatus::Found(n) => format!("検索結果: {n} 件"),
            SearchStatus::NoResults => "データが見つかりませんでした。".to_string(),
            SearchStatus::Failed(msg) => format!("データの取得に失敗しました: {msg}"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SearchStatus::NoResults | SearchStatus::Failed(_))
    }
}
