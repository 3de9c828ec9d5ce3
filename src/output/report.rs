//! Per-sink results of one delivery.

use std::fmt;

use crate::error::OutputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    File,
    Clipboard,
    Terminal,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::File => "file",
            SinkKind::Clipboard => "clipboard",
            SinkKind::Terminal => "terminal",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct SinkOutcome {
    pub sink: SinkKind,
    pub result: Result<(), OutputError>,
}

/// One outcome per attempted sink, in attempt order.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    outcomes: Vec<SinkOutcome>,
}

impl DeliveryReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sink: SinkKind, result: Result<(), OutputError>) {
        self.outcomes.push(SinkOutcome { sink, result });
    }

    pub fn outcomes(&self) -> &[SinkOutcome] {
        &self.outcomes
    }

    pub fn attempted(&self, sink: SinkKind) -> bool {
        self.outcomes.iter().any(|o| o.sink == sink)
    }

    pub fn succeeded(&self, sink: SinkKind) -> bool {
        self.outcomes
            .iter()
            .any(|o| o.sink == sink && o.result.is_ok())
    }

    /// Number of times `sink` was attempted.
    pub fn count(&self, sink: SinkKind) -> usize {
        self.outcomes.iter().filter(|o| o.sink == sink).count()
    }

    /// Consume the report, surfacing the file-sink failure if there was one.
    ///
    /// Clipboard and terminal failures are informational only.
    pub fn into_result(self) -> Result<(), OutputError> {
        for outcome in self.outcomes {
            if outcome.sink == SinkKind::File {
                outcome.result?;
            }
        }
        Ok(())
    }
}
