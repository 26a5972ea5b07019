use crate::domain::model::MonthKey;
use crate::utils::error::Result;
use crate::utils::validation::{validate_date_pattern, validate_not_empty, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// 顯示用格式設定，啟動時建立一次後以參考傳給各 presenter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormat {
    /// Date pattern for list rows, e.g. `2024.03.10`.
    pub list_date: String,
    /// Date pattern for the detail view, e.g. `2024-03-10`.
    pub detail_date: String,
    /// Pattern for month group titles, rendered from the first day of the month.
    pub month_title: String,
    pub placeholder: String,
    pub genre_separator: String,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            list_date: "%Y.%m.%d".to_string(),
            detail_date: "%Y-%m-%d".to_string(),
            month_title: "%Y-%m".to_string(),
            placeholder: "-".to_string(),
            genre_separator: " / ".to_string(),
        }
    }
}

impl DisplayFormat {
    pub fn list_date(&self, date: Option<NaiveDate>) -> String {
        self.date_with(&self.list_date, date)
    }

    pub fn detail_date(&self, date: Option<NaiveDate>) -> String {
        self.date_with(&self.detail_date, date)
    }

    pub fn month_title(&self, key: MonthKey) -> String {
        self.date_with(&self.month_title, key.first_day())
    }

    /// 分數 = rating × 10，固定一位小數；沒有 rating 時用 placeholder
    pub fn score(&self, rating: Option<f64>) -> String {
        match rating {
            Some(rate) => format!("{:.1}", rate * 10.0),
            None => self.placeholder.clone(),
        }
    }

    pub fn genres(&self, genres: &[String]) -> String {
        if genres.is_empty() {
            self.placeholder.clone()
        } else {
            genres.join(&self.genre_separator)
        }
    }

    pub fn overview(&self, overview: &str) -> String {
        if overview.is_empty() {
            self.placeholder.clone()
        } else {
            overview.to_string()
        }
    }

    fn date_with(&self, pattern: &str, date: Option<NaiveDate>) -> String {
        let Some(date) = date else {
            return self.placeholder.clone();
        };

        let mut out = String::new();
        if write!(out, "{}", date.format(pattern)).is_err() {
            tracing::warn!("Invalid date pattern '{}', using placeholder", pattern);
            return self.placeholder.clone();
        }
        out
    }
}

impl Validate for DisplayFormat {
    fn validate(&self) -> Result<()> {
        validate_date_pattern("display.list_date", &self.list_date)?;
        validate_date_pattern("display.detail_date", &self.detail_date)?;
        validate_date_pattern("display.month_title", &self.month_title)?;
        validate_not_empty("display.placeholder", &self.placeholder)?;
        validate_not_empty("display.genre_separator", &self.genre_separator)?;
        Ok(())
    }
}
