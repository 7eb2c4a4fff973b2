//! Commands on text-bearing widgets.

use super::resolve;
use crate::document::Document;
use prototyper_core::{ObjectId, TextStyle};

/// Text content edit. The widget's [`TextDocument`](crate::model::TextDocument)
/// keeps its own log, so this only steps that log.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeTextOnForm {
    pub id: ObjectId,
}

impl ChangeTextOnForm {
    pub fn new(id: ObjectId) -> Self {
        Self { id }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        let Some(object) = resolve(doc, &self.id, "Change text") else {
            return;
        };
        match object.text_document_mut() {
            Ok(text) => {
                if !text.redo() {
                    tracing::error!("Text of {} has nothing to redo", self.id);
                }
            }
            Err(e) => tracing::warn!("Change text: {}", e),
        }
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        let Some(object) = resolve(doc, &self.id, "Change text") else {
            return;
        };
        match object.text_document_mut() {
            Ok(text) => {
                if !text.undo() {
                    tracing::error!("Text of {} has nothing to undo", self.id);
                }
            }
            Err(e) => tracing::warn!("Change text: {}", e),
        }
    }
}

/// Font, alignment or colour change on a Button, CheckBox, RadioButton or
/// SpinBox.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeTextWithOpts {
    pub id: ObjectId,
    pub old_style: TextStyle,
    pub new_style: TextStyle,
}

impl ChangeTextWithOpts {
    pub fn new(id: ObjectId, old_style: TextStyle, new_style: TextStyle) -> Self {
        Self {
            id,
            old_style,
            new_style,
        }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        self.set(doc, self.new_style.clone());
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        self.set(doc, self.old_style.clone());
    }

    fn set(&self, doc: &mut Document, style: TextStyle) {
        if let Some(object) = resolve(doc, &self.id, "Change text options") {
            if let Err(e) = object.set_text_style(style) {
                tracing::warn!("Change text options: {}", e);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeCheckState {
    pub id: ObjectId,
    /// State after the change.
    pub checked: bool,
}

impl ChangeCheckState {
    pub fn new(id: ObjectId, checked: bool) -> Self {
        Self { id, checked }
    }

    pub(crate) fn apply(&mut self, doc: &mut Document) {
        self.set(doc, self.checked);
    }

    pub(crate) fn undo(&mut self, doc: &mut Document) {
        self.set(doc, !self.checked);
    }

    fn set(&self, doc: &mut Document, checked: bool) {
        if let Some(object) = resolve(doc, &self.id, "Change check state") {
            if let Err(e) = object.set_checked(checked) {
                tracing::warn!("Change check state: {}", e);
            }
        }
    }
}
