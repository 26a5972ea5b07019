use crate::core::format::DisplayFormat;
use crate::domain::model::{MonthGroup, MonthKey, Movie, MovieListItem};
use crate::domain::ports::MovieUsecase;
use crate::utils::error::{ExplorerError, Result};
use chrono::NaiveDate;

pub fn list_item(movie: &Movie, format: &DisplayFormat) -> MovieListItem {
    MovieListItem {
        id: movie.id,
        image_url: movie.poster_path.clone(),
        title: movie.title.clone(),
        date: format.list_date(movie.date),
        score: format.score(movie.rating),
    }
}

/// Dated movies only, newest first. `sort_by` is stable, so equal dates keep
/// their input order.
fn dated_newest_first(movies: &[Movie]) -> Vec<(NaiveDate, &Movie)> {
    let mut dated: Vec<(NaiveDate, &Movie)> = movies
        .iter()
        .filter_map(|movie| movie.date.map(|date| (date, movie)))
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated
}

/// 依月份分組：月份由新到舊，組內依日期由新到舊；沒有日期的電影不進任何分組
pub fn group_by_month(movies: &[Movie], format: &DisplayFormat) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();

    // Sorted input makes each month a contiguous run.
    for (date, movie) in dated_newest_first(movies) {
        let key = MonthKey::of(date);
        match groups.last_mut() {
            Some(group) if group.key == key => {
                group.items.push(list_item(movie, format));
                group.movies.push(movie.clone());
            }
            _ => groups.push(MonthGroup {
                key,
                title: format.month_title(key),
                items: vec![list_item(movie, format)],
                movies: vec![movie.clone()],
            }),
        }
    }

    groups
}

/// 平鋪版本：有日期的由新到舊，之後接上沒有日期的 (保持原順序)
pub fn flat_list(movies: &[Movie], format: &DisplayFormat) -> Vec<MovieListItem> {
    let undated = movies.iter().filter(|movie| movie.date.is_none());

    dated_newest_first(movies)
        .into_iter()
        .map(|(_, movie)| movie)
        .chain(undated)
        .map(|movie| list_item(movie, format))
        .collect()
}

pub struct MovieListPresenter<'a> {
    format: &'a DisplayFormat,
    catalog: Vec<Movie>,
    sections: Vec<MonthGroup>,
    error: Option<String>,
}

impl<'a> MovieListPresenter<'a> {
    pub fn new(format: &'a DisplayFormat) -> Self {
        Self {
            format,
            catalog: Vec::new(),
            sections: Vec::new(),
            error: None,
        }
    }

    /// 取得目錄並分組。失敗時記下訊息並回傳空清單
    pub async fn load<U: MovieUsecase + ?Sized>(&mut self, usecase: &U) -> &[MonthGroup] {
        match usecase.fetch_all().await {
            Ok(movies) => {
                self.present(&movies);
            }
            Err(e) => {
                tracing::warn!("Showing empty movie list: {}", e);
                self.catalog.clear();
                self.sections.clear();
                self.error = Some(e.user_friendly_message());
            }
        }
        &self.sections
    }

    pub fn present(&mut self, movies: &[Movie]) -> &[MonthGroup] {
        self.catalog = movies.to_vec();
        self.sections = group_by_month(movies, self.format);
        self.error = None;
        tracing::debug!(
            "Presented {} movies in {} month groups",
            self.sections.iter().map(|g| g.items.len()).sum::<usize>(),
            self.sections.len()
        );
        &self.sections
    }

    pub fn present_flat(&self, movies: &[Movie]) -> Vec<MovieListItem> {
        flat_list(movies, self.format)
    }

    /// Movies from the last successful fetch, in catalog order.
    pub fn catalog(&self) -> &[Movie] {
        &self.catalog
    }

    pub fn sections(&self) -> &[MonthGroup] {
        &self.sections
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 索引必須來自最後一次輸出的分組；越界代表呼叫端的錯誤
    pub fn resolve(&self, group: usize, item: usize) -> Result<&Movie> {
        self.sections
            .get(group)
            .and_then(|section| section.movies.get(item))
            .ok_or_else(|| {
                tracing::error!(
                    "Selection {}:{} does not address the last presented list",
                    group,
                    item
                );
                ExplorerError::SelectionOutOfRange { group, item }
            })
    }
}
