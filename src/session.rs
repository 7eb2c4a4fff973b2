//! Scripted editing session.
//!
//! Builds a small login form, edits it through the recorded actions and
//! walks the whole history back and forth, logging the document at each
//! step.

use prototyper_core::{Brush, Color, Point, Result, Segment};
use prototyper_designer::model::ObjectKind;
use prototyper_designer::EditorState;

/// Outcome of [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub recorded: usize,
    pub undone: usize,
    pub redone: usize,
    pub objects: usize,
}

fn log_document(editor: &EditorState, step: &str) {
    tracing::info!(
        step,
        objects = editor.document.object_count(),
        top_level = editor.document.top_level().len(),
        mode = ?editor.mode(),
        "Document state"
    );
}

/// Runs the scripted session on `editor`.
pub fn run(editor: &mut EditorState) -> Result<SessionReport> {
    let frame = editor.create_line(Segment::from_coords(0.0, 0.0, 200.0, 0.0))?;
    let ok = editor.create_element(ObjectKind::Button)?;
    let remember = editor.create_element(ObjectKind::CheckBox)?;
    let retries = editor.create_element(ObjectKind::SpinBox)?;
    log_document(editor, "created");

    editor.add_segment(&frame, Segment::from_coords(200.0, 0.0, 200.0, 120.0))?;
    editor.add_segment(&frame, Segment::from_coords(200.0, 120.0, 0.0, 120.0))?;
    editor.move_poly_node(&frame, 2, Point::new(210.0, 130.0))?;
    editor.edit_text(&ok, "Sign in")?;
    editor.edit_text(&remember, "Remember me")?;
    editor.set_checked(&remember, true)?;
    editor.change_brush(&retries, Brush::solid(Color::rgb(240, 240, 240)))?;
    let controls = editor.group(&[ok.clone(), remember.clone(), retries.clone()])?;
    editor.duplicate(&[controls.clone()])?;
    editor.send_to_back(&[frame.clone()])?;
    log_document(editor, "edited");

    let recorded = editor.history().undo_depth();
    let mut undone = 0;
    while let Some(text) = editor.undo_text() {
        tracing::info!("{}", text);
        editor.undo();
        undone += 1;
    }
    log_document(editor, "undone");

    let mut redone = 0;
    while let Some(text) = editor.redo_text() {
        tracing::info!("{}", text);
        editor.redo();
        redone += 1;
    }
    log_document(editor, "redone");

    Ok(SessionReport {
        recorded,
        undone,
        redone,
        objects: editor.document.object_count(),
    })
}
