//! Source-control adapters.

mod git;

pub use git::{GitInitializer, validate_remote_url};
