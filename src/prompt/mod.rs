//! Raw prompt producers for the built-in commands.

pub mod audit;
pub mod commit;
pub mod pr;
pub mod review;
pub mod text;

pub use audit::{AuditFormat, NO_CHANGES_AUDIT_CONTEXT, build_audit_prompt};
pub use commit::build_commit_prompt;
pub use pr::build_pr_prompt;
pub use review::build_review_prompt;
pub use text::{split_paths, truncate_chars};
