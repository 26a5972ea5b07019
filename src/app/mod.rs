pub mod presenters;
pub mod render;
