//! Pending-change queries against the system `git` binary.

pub mod diff;
pub mod scope;
pub mod source;
pub mod status;

pub use diff::DiffAggregator;
pub use scope::{DiffScope, DiffSection, STAGED_LABEL, UNSTAGED_LABEL};
pub use source::{GitCli, VcsSource};
pub use status::{parse_name_only, parse_porcelain};
