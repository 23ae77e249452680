pub mod flows;
pub mod messages;

pub use flows::{InitOutcome, SearchInput, SearchOutcome, handle_search, init_app};
