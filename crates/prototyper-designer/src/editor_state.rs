//! Editor state: the document plus its history.
//!
//! Every user action here follows the same pattern: perform the edit on
//! the [`Document`], build the command describing it, push the command.
//! Pushing is inert, so the edit is applied exactly once.

use crate::commands::{
    AddLineToPolyline, ChangeBrush, ChangeCheckState, ChangeLine, ChangePen, ChangeTextOnForm,
    ChangeTextWithOpts, ChangeZ, DeleteItems, DesignerCommand, Duplicate, EditPolyNode,
    GroupItems, RecordedCommand, UngroupItems,
};
use crate::document::Document;
use crate::history::{UndoStack, DEFAULT_HISTORY_LIMIT};
use crate::mode::{EditMode, ModeController, ModeTracker};
use crate::model::{ObjectKind, ObjectShape};
use prototyper_core::{
    shared, Brush, ModelError, ObjectId, Pen, Point, RegistryError, Result, Segment, Shared,
    TextStyle,
};

/// Tunables taken from the editor settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorOptions {
    pub grid_step: f64,
    /// Grid steps a duplicate is offset by on each axis.
    pub duplicate_offset_steps: u32,
    pub history_limit: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_step: 10.0,
            duplicate_offset_steps: 1,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Debug)]
pub struct EditorState {
    pub document: Document,
    history: UndoStack,
    mode: Shared<ModeTracker>,
    options: EditorOptions,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            document: Document::new(),
            history: UndoStack::new(options.history_limit),
            mode: shared(ModeTracker::new()),
            options,
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// The controller handed to every recorded command.
    pub fn mode_controller(&self) -> Shared<dyn ModeController> {
        self.mode.clone()
    }

    pub fn mode(&self) -> EditMode {
        self.mode.borrow().mode()
    }

    /// Sets the active tool, as the toolbar would.
    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode.borrow_mut().set_mode(mode);
    }

    /// Offset applied to duplicates on both axes.
    pub fn duplicate_offset(&self) -> f64 {
        self.options.grid_step * f64::from(self.options.duplicate_offset_steps)
    }

    fn record(&mut self, command: DesignerCommand) {
        let cmd = RecordedCommand::new(command, self.mode_controller());
        self.history.push(cmd, &mut self.document);
    }

    // Creation is not recorded in history.

    pub fn create_element(&mut self, kind: ObjectKind) -> Result<ObjectId> {
        self.document.create_element(kind, None)
    }

    /// Draws a new line and makes it the line tool's target, handles shown.
    pub fn create_line(&mut self, line: Segment) -> Result<ObjectId> {
        let id = self.document.add_line(None, line)?;
        self.document.show_handles(&id);
        self.document.set_current_line(&id);
        Ok(id)
    }

    pub fn create_shape(&mut self, shape: ObjectShape) -> Result<ObjectId> {
        self.document.insert_shape(None, shape)
    }

    pub fn group(&mut self, items: &[ObjectId]) -> Result<ObjectId> {
        let group_id = self.document.group(items, None)?;
        let members = self.document.children_of(&group_id);
        self.record(DesignerCommand::Group(GroupItems::new(
            group_id.clone(),
            members,
        )));
        Ok(group_id)
    }

    pub fn ungroup(&mut self, group_id: &ObjectId) -> Result<Vec<ObjectId>> {
        let members = self.document.ungroup(group_id)?;
        self.record(DesignerCommand::Ungroup(UngroupItems::new(
            members.clone(),
            group_id.clone(),
        )));
        Ok(members)
    }

    /// Adds a segment to a line or polyline, promoting a line to a polyline.
    pub fn add_segment(&mut self, id: &ObjectId, segment: Segment) -> Result<()> {
        self.document.append_segment(id, segment)?;
        self.record(DesignerCommand::AddLineToPolyline(AddLineToPolyline::new(
            id.clone(),
            segment,
        )));
        Ok(())
    }

    pub fn change_line(&mut self, id: &ObjectId, line: Segment) -> Result<()> {
        let object = self.find_mut(id)?;
        let shape = object.as_line_mut()?;
        let old_line = shape.line();
        shape.set_line(line);
        self.document.show_handles(id);
        self.record(DesignerCommand::ChangeLine(ChangeLine::new(
            id.clone(),
            old_line,
            line,
        )));
        Ok(())
    }

    pub fn change_pen(&mut self, id: &ObjectId, pen: Pen) -> Result<()> {
        let object = self.find_mut(id)?;
        let old_pen = object.pen();
        object.set_object_pen(pen);
        self.record(DesignerCommand::ChangePen(ChangePen::new(
            id.clone(),
            old_pen,
            pen,
        )));
        Ok(())
    }

    pub fn change_brush(&mut self, id: &ObjectId, brush: Brush) -> Result<()> {
        let object = self.find_mut(id)?;
        let old_brush = object.brush();
        object.set_object_brush(brush);
        self.record(DesignerCommand::ChangeBrush(ChangeBrush::new(
            id.clone(),
            old_brush,
            brush,
        )));
        Ok(())
    }

    /// Replaces the text of a widget. Returns `false`, recording nothing,
    /// when the text is unchanged.
    pub fn edit_text(&mut self, id: &ObjectId, text: &str) -> Result<bool> {
        let object = self.find_mut(id)?;
        if !object.text_document_mut()?.set_text(text) {
            return Ok(false);
        }
        self.record(DesignerCommand::ChangeTextOnForm(ChangeTextOnForm::new(
            id.clone(),
        )));
        Ok(true)
    }

    pub fn change_text_style(&mut self, id: &ObjectId, style: TextStyle) -> Result<()> {
        let object = self.find_mut(id)?;
        let old_style = object.text_style().cloned().ok_or_else(|| ModelError::VariantMismatch {
            id: id.clone(),
            expected: "text widget".to_string(),
            found: object.kind().to_string(),
        })?;
        object.set_text_style(style.clone())?;
        self.record(DesignerCommand::ChangeTextWithOpts(ChangeTextWithOpts::new(
            id.clone(),
            old_style,
            style,
        )));
        Ok(())
    }

    /// Sets the checked state of a CheckBox or RadioButton. Nothing is
    /// recorded when the state does not change.
    pub fn set_checked(&mut self, id: &ObjectId, checked: bool) -> Result<()> {
        let object = self.find_mut(id)?;
        if object.is_checked() == Some(checked) {
            return Ok(());
        }
        object.set_checked(checked)?;
        self.record(DesignerCommand::ChangeCheckState(ChangeCheckState::new(
            id.clone(),
            checked,
        )));
        Ok(())
    }

    /// Duplicates `items` one offset step down and to the right.
    pub fn duplicate(&mut self, items: &[ObjectId]) -> Result<Vec<ObjectId>> {
        if let Some(missing) = items.iter().find(|id| !self.document.contains(id)) {
            return Err(RegistryError::NotFound {
                id: missing.clone(),
            }
            .into());
        }
        let offset = self.duplicate_offset();
        let mut copies = Vec::with_capacity(items.len());
        for id in items {
            copies.push(self.document.duplicate(id, offset, offset)?);
        }
        self.record(DesignerCommand::Duplicate(Duplicate::new(
            items.to_vec(),
            copies.clone(),
            offset,
        )));
        Ok(copies)
    }

    /// Applies new draw orders as one batch. Fails without changing
    /// anything when an identifier does not resolve.
    pub fn change_z(&mut self, orders: &[(ObjectId, f64)]) -> Result<()> {
        let mut old = Vec::with_capacity(orders.len());
        for (id, _) in orders {
            old.push((id.clone(), self.find_mut(id)?.z));
        }
        for (id, z) in orders {
            self.document.set_z(id, *z);
        }
        self.record(DesignerCommand::ChangeZ(ChangeZ::new(old, orders.to_vec())));
        Ok(())
    }

    /// Moves `items` above every other object, keeping their relative order.
    pub fn bring_to_front(&mut self, items: &[ObjectId]) -> Result<()> {
        let sorted = self.sorted_by_z(items)?;
        let top = self.document.z_range().map_or(0.0, |(_, hi)| hi);
        let orders: Vec<(ObjectId, f64)> = sorted
            .into_iter()
            .enumerate()
            .map(|(i, id)| (id, top + 1.0 + i as f64))
            .collect();
        self.change_z(&orders)
    }

    /// Moves `items` below every other object, keeping their relative order.
    pub fn send_to_back(&mut self, items: &[ObjectId]) -> Result<()> {
        let sorted = self.sorted_by_z(items)?;
        let bottom = self.document.z_range().map_or(0.0, |(lo, _)| lo);
        let count = sorted.len() as f64;
        let orders: Vec<(ObjectId, f64)> = sorted
            .into_iter()
            .enumerate()
            .map(|(i, id)| (id, bottom - count + i as f64))
            .collect();
        self.change_z(&orders)
    }

    fn sorted_by_z(&mut self, items: &[ObjectId]) -> Result<Vec<ObjectId>> {
        let mut with_z = Vec::with_capacity(items.len());
        for id in items {
            with_z.push((id.clone(), self.find_mut(id)?.z));
        }
        with_z.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(with_z.into_iter().map(|(id, _)| id).collect())
    }

    /// Drags node `index` of polyline `id` to `to`.
    pub fn move_poly_node(&mut self, id: &ObjectId, index: usize, to: Point) -> Result<()> {
        let object = self.find_mut(id)?;
        let polyline = object.as_polyline_mut()?;
        let node_count = polyline.node_count();
        let out_of_range = || ModelError::NodeOutOfRange {
            id: id.clone(),
            index,
            node_count,
        };
        let old = polyline.adjacent_segments(index).ok_or_else(out_of_range)?;
        let new = polyline.dragged_node(index, to).ok_or_else(out_of_range)?;
        self.document.move_node(id, index, new)?;
        self.record(DesignerCommand::EditPolyNode(EditPolyNode::new(
            id.clone(),
            index,
            old,
            new,
        )));
        Ok(())
    }

    /// Deletes `items` as one undoable step. Returns the number of objects
    /// removed, grouped members and emptied groups included.
    pub fn delete(&mut self, items: &[ObjectId]) -> usize {
        let removed = self.document.delete_items(items);
        if removed.is_empty() {
            return 0;
        }
        let count = removed.len();
        self.record(DesignerCommand::DeleteItems(DeleteItems::new(
            items.to_vec(),
            removed,
        )));
        count
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.document)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.document)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_text(&self) -> Option<String> {
        self.history.undo_text()
    }

    pub fn redo_text(&self) -> Option<String> {
        self.history.redo_text()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn find_mut(&mut self, id: &ObjectId) -> Result<&mut crate::model::EditableObject> {
        self.document
            .find_mut(id)
            .ok_or_else(|| RegistryError::NotFound { id: id.clone() }.into())
    }
}
