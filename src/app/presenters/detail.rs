use crate::core::format::DisplayFormat;
use crate::domain::model::{Movie, MovieDetailItem};

pub struct DetailPresenter<'a> {
    format: &'a DisplayFormat,
}

impl<'a> DetailPresenter<'a> {
    pub fn new(format: &'a DisplayFormat) -> Self {
        Self { format }
    }

    pub fn present(&self, movie: &Movie) -> MovieDetailItem {
        MovieDetailItem {
            image_url: movie.poster_path.clone(),
            title: movie.title.clone(),
            date: self.format.detail_date(movie.date),
            genres: self.format.genres(&movie.genres),
            score: self.format.score(movie.rating),
            overview: self.format.overview(&movie.overview),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn movie() -> Movie {
        Movie {
            id: 1,
            title: "Night Harbor".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 10),
            overview: "A ferry captain".to_string(),
            poster_path: "https://image.example.com/1.jpg".to_string(),
            rating: Some(7.35),
            genres: vec!["Action".to_string(), "Drama".to_string()],
        }
    }

    #[test]
    fn test_present_full_movie() {
        let format = DisplayFormat::default();
        let detail = DetailPresenter::new(&format).present(&movie());

        assert_eq!(detail.title, "Night Harbor");
        assert_eq!(detail.image_url, "https://image.example.com/1.jpg");
        assert_eq!(detail.date, "2024-03-10");
        assert_eq!(detail.genres, "Action / Drama");
        assert_eq!(detail.score, "73.5");
        assert_eq!(detail.overview, "A ferry captain");
    }

    #[test]
    fn test_present_uses_placeholders() {
        let format = DisplayFormat::default();
        let sparse = Movie {
            date: None,
            overview: String::new(),
            rating: None,
            genres: vec![],
            ..movie()
        };

        let detail = DetailPresenter::new(&format).present(&sparse);

        assert_eq!(detail.date, "-");
        assert_eq!(detail.genres, "-");
        assert_eq!(detail.score, "-");
        assert_eq!(detail.overview, "-");
    }
}
