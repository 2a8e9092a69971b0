pub mod fetcher;
pub mod reference;
pub mod runner;

pub use crate::domain::model::VerseQuery;
pub use crate::domain::ports::VerseSource;
pub use crate::utils::error::Result;
