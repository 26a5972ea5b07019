pub mod detail;
pub mod list;

pub use detail::DetailPresenter;
pub use list::MovieListPresenter;
