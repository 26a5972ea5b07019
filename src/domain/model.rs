use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// 目錄 JSON 的外層信封
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    pub page: i64,
    pub total_results: i64,
    pub total_pages: i64,
    pub movies: Vec<MovieDto>,
    pub status: String,
    pub timestamp: String,
}

/// 單筆原始電影記錄，映射成 [`Movie`] 後即丟棄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    pub overview: String,
    pub poster_path: String,
    #[serde(default)]
    pub popularity: Option<f64>,
    pub genre: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub overview: String,
    pub poster_path: String,
    /// Raw 0-10 popularity; scaled to a percentage only when displayed.
    pub rating: Option<f64>,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of the month, used when rendering the key with a date pattern.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieListItem {
    pub id: i64,
    pub image_url: String,
    pub title: String,
    pub date: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    pub key: MonthKey,
    pub title: String,
    pub items: Vec<MovieListItem>,
    /// Same order as `items`; backs selection lookups.
    #[serde(skip)]
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetailItem {
    pub image_url: String,
    pub title: String,
    pub date: String,
    pub genres: String,
    pub score: String,
    pub overview: String,
}

/// `GROUP:ITEM` index pair addressing a row of the last presented list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub group: usize,
    pub item: usize,
}

impl std::str::FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (group, item) = s
            .split_once(':')
            .ok_or_else(|| format!("expected GROUP:ITEM, got '{}'", s))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| format!("invalid index '{}': {}", part, e))
        };
        Ok(Self {
            group: parse(group)?,
            item: parse(item)?,
        })
    }
}
