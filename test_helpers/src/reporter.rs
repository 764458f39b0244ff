//! Recording issue reporter.

use std::sync::Arc;

use nodeconf::{ConfigDomain, GenerationIssue, IssueReporter, IssueStage};
use parking_lot::Mutex;

/// Collects every [`GenerationIssue`] passed to its reporter.
///
/// Clones share the same log, so a test can hand [`IssueRecorder::reporter`]
/// to an assembler and inspect the recorder afterwards.
#[derive(Clone, Debug, Default)]
pub struct IssueRecorder {
    issues: Arc<Mutex<Vec<GenerationIssue>>>,
}

impl IssueRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reporter appending to this recorder.
    #[must_use]
    pub fn reporter(&self) -> IssueReporter {
        let issues = Arc::clone(&self.issues);
        Arc::new(move |issue: &GenerationIssue| issues.lock().push(issue.clone()))
    }

    /// Snapshot of the recorded issues in report order.
    #[must_use]
    pub fn issues(&self) -> Vec<GenerationIssue> {
        self.issues.lock().clone()
    }

    /// `(domain, stage)` pairs of the recorded issues in report order.
    #[must_use]
    pub fn summary(&self) -> Vec<(ConfigDomain, IssueStage)> {
        self.issues
            .lock()
            .iter()
            .map(|issue| (issue.domain, issue.stage))
            .collect()
    }

    /// Number of recorded issues.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.lock().len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.lock().is_empty()
    }
}
