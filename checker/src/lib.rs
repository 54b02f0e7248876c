//! Directory-backed front end for `simcore`.

pub mod cli;
pub mod report;
pub mod source;

pub use cli::{run, Cli};
pub use source::DirectorySource;
