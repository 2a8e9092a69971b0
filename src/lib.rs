pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::Invocation, VerseConfig};
pub use core::{fetcher::VerseFetcher, reference::ReferenceResolver, runner::VerseRunner};
pub use utils::error::{Result, VerseError};
