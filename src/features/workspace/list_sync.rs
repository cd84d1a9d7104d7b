use crate::features::prompts::models::{Prompt, PromptId};

/// The ordered prompts currently on screen, newest first.
///
/// Only confirmed results are applied; there is no optimistic insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptList {
    prompts: Vec<Prompt>,
}

impl PromptList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence with the initial fetch
    pub fn initialize(&mut self, prompts: Vec<Prompt>) {
        self.prompts = prompts;
    }

    pub fn on_created(&mut self, prompt: Prompt) {
        self.prompts.insert(0, prompt);
    }

    /// Replace the matching element in place. Returns `false` when absent.
    pub fn on_updated(&mut self, prompt: Prompt) -> bool {
        match self.prompts.iter_mut().find(|p| p.id == prompt.id) {
            Some(slot) => {
                *slot = prompt;
                true
            }
            None => {
                tracing::debug!("Ignoring update for prompt {} not in list", prompt.id);
                false
            }
        }
    }

    /// Remove the matching element. Returns `false` when absent.
    pub fn on_deleted(&mut self, id: PromptId) -> bool {
        match self.prompts.iter().position(|p| p.id == id) {
            Some(index) => {
                self.prompts.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn get(&self, id: PromptId) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    pub fn ids(&self) -> Vec<PromptId> {
        self.prompts.iter().map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}
