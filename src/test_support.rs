use crate::generation::{BackendError, Completion, CompletionCall, TextGenerator};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; serialize tests that change it.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Canned reply for `StubGenerator`.
pub(crate) enum StubReply {
    Text(String),
    Raw(serde_json::Value),
    Transport(String),
    Status(u16, String),
}

/// Backend double that records every call it receives.
pub(crate) struct StubGenerator {
    reply: StubReply,
    calls: RefCell<Vec<CompletionCall>>,
}

impl StubGenerator {
    pub(crate) fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn text(text: &str) -> Self {
        Self::new(StubReply::Text(text.to_string()))
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub(crate) fn last_call(&self) -> Option<CompletionCall> {
        self.calls.borrow().last().cloned()
    }
}

impl TextGenerator for StubGenerator {
    fn generate(&self, call: &CompletionCall) -> Result<Completion, BackendError> {
        self.calls.borrow_mut().push(call.clone());
        match &self.reply {
            StubReply::Text(text) => Ok(Completion {
                text: Some(text.clone()),
                raw: serde_json::json!({ "output_text": text }),
            }),
            StubReply::Raw(raw) => Ok(Completion {
                text: None,
                raw: raw.clone(),
            }),
            StubReply::Transport(message) => Err(BackendError::Transport(message.clone())),
            StubReply::Status(status, message) => Err(BackendError::Status {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
