use serde::{Deserialize, Serialize};

/// One recorded content change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TextEdit {
    before: String,
    after: String,
}

/// Text content of a form widget with its own internal undo/redo log.
///
/// Edits made through [`TextDocument::set_text`] are recorded here rather
/// than in the document history; the history only holds a marker command
/// that delegates to [`TextDocument::undo`] / [`TextDocument::redo`].
/// Equality compares content only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextDocument {
    content: String,
    #[serde(skip)]
    undo_log: Vec<TextEdit>,
    #[serde(skip)]
    redo_log: Vec<TextEdit>,
}

impl TextDocument {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            undo_log: Vec::new(),
            redo_log: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    /// Replaces the content and records the edit.
    ///
    /// Returns false (and records nothing) when the content is unchanged.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.content {
            return false;
        }
        let before = std::mem::replace(&mut self.content, text);
        self.undo_log.push(TextEdit {
            before,
            after: self.content.clone(),
        });
        self.redo_log.clear();
        true
    }

    pub fn undo(&mut self) -> bool {
        match self.undo_log.pop() {
            Some(edit) => {
                self.content = edit.before.clone();
                self.redo_log.push(edit);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.redo_log.pop() {
            Some(edit) => {
                self.content = edit.after.clone();
                self.undo_log.push(edit);
                true
            }
            None => false,
        }
    }

    pub fn is_undo_available(&self) -> bool {
        !self.undo_log.is_empty()
    }

    pub fn is_redo_available(&self) -> bool {
        !self.redo_log.is_empty()
    }

    /// Copy of the content with an empty edit log, used for duplicates.
    pub fn detached_copy(&self) -> Self {
        Self::new(self.content.clone())
    }
}

impl PartialEq for TextDocument {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}
