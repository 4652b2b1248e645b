pub mod source;
pub mod store;

pub use source::{select_source, ConfigFileSource, PreferenceSource, SearchPathSource};
pub use store::{expand_path, AddOutcome, RemoveOutcome, SearchPathStore};
