//! Progress reporting for long-running assembly runs.
//!
//! The engine never talks to a terminal directly; it emits [`Progress`]
//! events through an optional callback and lets the embedding application
//! decide how to render them.

/// A coarse progress event emitted during an assembly run.
///
/// Events pair up: a `PhaseStart` is eventually answered by a
/// `PhaseFinish`, a `TaskStart` by a `TaskFinish`, with any number of
/// increments in between.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    /// A named stage of the workflow has begun, such as the search itself.
    PhaseStart { name: &'static str },
    /// The current phase is over.
    PhaseFinish,

    /// Countable work has begun. A `total_steps` of zero means the step
    /// count is unknown up front, as when enumerating an open-ended
    /// solution space.
    TaskStart { total_steps: u64 },
    /// One step of the current task finished.
    TaskIncrement,
    /// The current task is over, successfully or not.
    TaskFinish,

    /// Free-form text worth surfacing to the user mid-run.
    Message(String),
}

/// The receiving end of a [`ProgressReporter`].
pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// A handle the workflows report through. A reporter without a callback
/// swallows every event, so library callers pay nothing for progress they
/// do not ask for.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    /// A reporter that discards every event.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
