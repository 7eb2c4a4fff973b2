//! Undoable edit commands.
//!
//! A command is built **after** its edit has already been performed on the
//! [`Document`]. Pushing it onto the [`UndoStack`](crate::history::UndoStack)
//! calls [`RecordedCommand::redo`] once, and that first call must not apply
//! the edit a second time. [`RecordedCommand`] tracks this with
//! `was_undone_at_least_once`: redo only acts after an undo has happened.
//!
//! Commands hold identifiers, never references to objects, because the
//! object behind an identifier can be destroyed and recreated between
//! applications (line ⇄ polyline conversion, ungroup/regroup, delete/restore).
//! An identifier that no longer resolves is skipped.

mod geometry;
mod structure;
mod style;
mod text;

pub use geometry::{AddLineToPolyline, ChangeLine, EditPolyNode};
pub use structure::{DeleteItems, Duplicate, GroupItems, UngroupItems};
pub use style::{ChangeBrush, ChangePen, ChangeZ};
pub use text::{ChangeCheckState, ChangeTextOnForm, ChangeTextWithOpts};

use crate::document::Document;
use crate::mode::{EditMode, ModeController};
use crate::model::EditableObject;
use prototyper_core::{ObjectId, Shared};

/// Resolves the target of a single-target command, logging when it is gone.
fn resolve<'a>(
    doc: &'a mut Document,
    id: &ObjectId,
    action: &str,
) -> Option<&'a mut EditableObject> {
    let object = doc.find_mut(id);
    if object.is_none() {
        tracing::debug!("{}: {} no longer exists, skipping", action, id);
    }
    object
}

#[derive(Debug, Clone)]
pub enum DesignerCommand {
    Group(GroupItems),
    Ungroup(UngroupItems),
    AddLineToPolyline(AddLineToPolyline),
    ChangeLine(ChangeLine),
    ChangePen(ChangePen),
    ChangeBrush(ChangeBrush),
    ChangeTextOnForm(ChangeTextOnForm),
    ChangeTextWithOpts(ChangeTextWithOpts),
    ChangeCheckState(ChangeCheckState),
    Duplicate(Duplicate),
    ChangeZ(ChangeZ),
    EditPolyNode(EditPolyNode),
    DeleteItems(DeleteItems),
}

impl DesignerCommand {
    /// Performs the forward edit.
    pub fn apply(&mut self, doc: &mut Document) {
        match self {
            DesignerCommand::Group(cmd) => cmd.apply(doc),
            DesignerCommand::Ungroup(cmd) => cmd.apply(doc),
            DesignerCommand::AddLineToPolyline(cmd) => cmd.apply(doc),
            DesignerCommand::ChangeLine(cmd) => cmd.apply(doc),
            DesignerCommand::ChangePen(cmd) => cmd.apply(doc),
            DesignerCommand::ChangeBrush(cmd) => cmd.apply(doc),
            DesignerCommand::ChangeTextOnForm(cmd) => cmd.apply(doc),
            DesignerCommand::ChangeTextWithOpts(cmd) => cmd.apply(doc),
            DesignerCommand::ChangeCheckState(cmd) => cmd.apply(doc),
            DesignerCommand::Duplicate(cmd) => cmd.apply(doc),
            DesignerCommand::ChangeZ(cmd) => cmd.apply(doc),
            DesignerCommand::EditPolyNode(cmd) => cmd.apply(doc),
            DesignerCommand::DeleteItems(cmd) => cmd.apply(doc),
        }
    }

    /// Reverses the edit.
    pub fn undo(&mut self, doc: &mut Document) {
        match self {
            DesignerCommand::Group(cmd) => cmd.undo(doc),
            DesignerCommand::Ungroup(cmd) => cmd.undo(doc),
            DesignerCommand::AddLineToPolyline(cmd) => cmd.undo(doc),
            DesignerCommand::ChangeLine(cmd) => cmd.undo(doc),
            DesignerCommand::ChangePen(cmd) => cmd.undo(doc),
            DesignerCommand::ChangeBrush(cmd) => cmd.undo(doc),
            DesignerCommand::ChangeTextOnForm(cmd) => cmd.undo(doc),
            DesignerCommand::ChangeTextWithOpts(cmd) => cmd.undo(doc),
            DesignerCommand::ChangeCheckState(cmd) => cmd.undo(doc),
            DesignerCommand::Duplicate(cmd) => cmd.undo(doc),
            DesignerCommand::ChangeZ(cmd) => cmd.undo(doc),
            DesignerCommand::EditPolyNode(cmd) => cmd.undo(doc),
            DesignerCommand::DeleteItems(cmd) => cmd.undo(doc),
        }
    }

    /// Menu text for the command.
    pub fn name(&self) -> &str {
        match self {
            DesignerCommand::Group(_) => "Group",
            DesignerCommand::Ungroup(_) => "Ungroup",
            DesignerCommand::AddLineToPolyline(_) => "Add Line",
            DesignerCommand::ChangeLine(_) => "Change Line",
            DesignerCommand::ChangePen(_) => "Change Pen",
            DesignerCommand::ChangeBrush(_) => "Change Brush",
            DesignerCommand::ChangeTextOnForm(_) => "Change Text",
            DesignerCommand::ChangeTextWithOpts(_) => "Change Text Options",
            DesignerCommand::ChangeCheckState(_) => "Change Check State",
            DesignerCommand::Duplicate(_) => "Duplicate",
            DesignerCommand::ChangeZ(_) => "Change Z",
            DesignerCommand::EditPolyNode(_) => "Edit Node",
            DesignerCommand::DeleteItems(_) => "Delete",
        }
    }

    /// Tool that must be active after this command is undone or redone.
    pub fn mode(&self) -> EditMode {
        match self {
            DesignerCommand::AddLineToPolyline(_) | DesignerCommand::EditPolyNode(_) => {
                EditMode::Polyline
            }
            _ => EditMode::Select,
        }
    }
}

/// A command as held by the undo stack.
///
/// Wraps a [`DesignerCommand`] with the already-applied flag and the mode
/// controller it notifies on every undo and redo.
pub struct RecordedCommand {
    command: DesignerCommand,
    was_undone_at_least_once: bool,
    mode_controller: Shared<dyn ModeController>,
}

impl RecordedCommand {
    /// Wraps a command whose edit has already been performed.
    pub fn new(command: DesignerCommand, mode_controller: Shared<dyn ModeController>) -> Self {
        Self {
            command,
            was_undone_at_least_once: false,
            mode_controller,
        }
    }

    pub fn command(&self) -> &DesignerCommand {
        &self.command
    }

    pub fn label(&self) -> &str {
        self.command.name()
    }

    pub fn was_undone_at_least_once(&self) -> bool {
        self.was_undone_at_least_once
    }

    pub fn undo(&mut self, doc: &mut Document) {
        self.switch_mode();
        tracing::debug!("Undo {}", self.label());
        self.command.undo(doc);
        self.was_undone_at_least_once = true;
    }

    /// Re-applies the edit, except on the call made when the command is
    /// first pushed: that state already exists.
    pub fn redo(&mut self, doc: &mut Document) {
        self.switch_mode();
        if !self.was_undone_at_least_once {
            return;
        }
        tracing::debug!("Redo {}", self.label());
        self.command.apply(doc);
    }

    fn switch_mode(&self) {
        self.mode_controller.borrow_mut().switch_to(self.command.mode());
    }
}

impl std::fmt::Debug for RecordedCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordedCommand")
            .field("command", &self.command)
            .field("was_undone_at_least_once", &self.was_undone_at_least_once)
            .finish_non_exhaustive()
    }
}
