pub mod exercises;
pub mod quotes;
pub mod recommender;

pub use recommender::Recommender;
