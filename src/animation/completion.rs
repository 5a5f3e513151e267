use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One-shot completion handle for a single animation session.
///
/// Starts unset and is set exactly once, when the session's running time
/// reaches its duration. Clones share the same flag, so a host can stash a
/// handle when the animation starts and poll it after each frame without
/// keeping a reference to the animator. Handles are not reusable across
/// sessions; every `initialize` issues a fresh one.
#[derive(Debug, Clone, Default)]
pub struct CompletionSignal {
    done: Arc<AtomicBool>,
}

impl CompletionSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the session this handle belongs to has finished
    pub fn is_complete(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    pub(crate) fn complete(&self) {
        self.done.store(true, Ordering::Release);
    }
}
