use crate::domain::model::{Movie, MovieDto};
use chrono::NaiveDate;

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析 `YYYY-MM-DD`，格式不符時回傳 `None` 而非錯誤
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), RELEASE_DATE_FORMAT).ok()
}

pub fn map_movie(dto: MovieDto) -> Movie {
    let date = dto.release_date.as_deref().and_then(parse_release_date);
    if date.is_none() {
        tracing::debug!(
            "Movie {} has no usable release date ({:?})",
            dto.id,
            dto.release_date
        );
    }

    Movie {
        id: dto.id,
        title: dto.title,
        date,
        overview: dto.overview,
        poster_path: dto.poster_path,
        rating: dto.popularity,
        genres: dto.genre,
    }
}

impl From<MovieDto> for Movie {
    fn from(dto: MovieDto) -> Self {
        map_movie(dto)
    }
}
