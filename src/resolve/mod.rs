pub mod flags;
pub mod resolver;
pub mod search;
pub mod url;

pub use flags::{FlagSet, parse_flags, partition_args};
pub use resolver::{Resolution, Resolver};
pub use search::SearchEngine;
pub use url::{is_literal_url, normalize_url};
