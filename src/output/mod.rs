//! Prompt delivery: file, clipboard and terminal sinks.

pub mod dispatcher;
pub mod report;
pub mod sink;

pub use dispatcher::{DeliveryOptions, OutputDispatcher};
pub use report::{DeliveryReport, SinkKind, SinkOutcome};
pub use sink::{ClipboardWriter, ECHO_RULE, SystemClipboard, echo_block, write_file_atomic};
