use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::features::prompts::models::PromptId;

/// How long a card shows its "Copied!" state
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_millis(1500);

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

pub trait Clipboard: Send + Sync {
    /// Write `text` verbatim
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps the last written text in memory. Used headless and in tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap_or_else(|e| e.into_inner()) = Some(text.to_string());
        Ok(())
    }
}

/// The operating system clipboard
#[cfg(feature = "system-clipboard")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

type MarkListener = Arc<dyn Fn(Option<PromptId>) + Send + Sync>;

/// Tracks which prompt was "just copied".
///
/// One timer at a time: a new copy aborts the pending reset. Must be used
/// from within a tokio runtime.
pub struct CopyIndicator {
    clipboard: Arc<dyn Clipboard>,
    mark: Arc<Mutex<Option<PromptId>>>,
    timer: Option<JoinHandle<()>>,
    window: Duration,
    listener: Option<MarkListener>,
}

impl CopyIndicator {
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            clipboard,
            mark: Arc::new(Mutex::new(None)),
            timer: None,
            window: COPY_FEEDBACK_WINDOW,
            listener: None,
        }
    }

    /// Called with every change of the mark, including the timed reset.
    /// Runs while the mark is locked, so it must not call back into the
    /// indicator.
    pub fn with_listener(
        mut self,
        listener: impl Fn(Option<PromptId>) + Send + Sync + 'static,
    ) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    pub fn copied_id(&self) -> Option<PromptId> {
        *self.mark.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Copy `content` and mark `id`. Failures are logged, never returned.
    pub fn copy(&mut self, id: PromptId, content: &str) -> bool {
        if let Err(e) = self.clipboard.write_text(content) {
            tracing::error!("Failed to copy prompt {}: {}", id, e);
            return false;
        }

        if let Some(previous) = self.timer.take() {
            previous.abort();
        }
        {
            let mut mark = self.mark.lock().unwrap_or_else(|e| e.into_inner());
            *mark = Some(id);
            if let Some(listener) = &self.listener {
                listener(Some(id));
            }
        }

        let mark = Arc::clone(&self.mark);
        let listener = self.listener.clone();
        let window = self.window;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // Listener runs under the lock so it never reports a stale mark
            let mut mark = mark.lock().unwrap_or_else(|e| e.into_inner());
            if *mark == Some(id) {
                *mark = None;
                if let Some(listener) = listener {
                    listener(None);
                }
            }
        }));

        true
    }
}

impl Drop for CopyIndicator {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}
