//! # Prototyper Designer
//!
//! The editing core of the mockup editor: the object model, the document
//! that owns live objects, and the command layer that makes structural
//! edits undoable.
//!
//! ## Core Components
//!
//! - **Model**: lines, polylines, groups and form widgets (buttons,
//!   checkboxes, radio buttons, spin boxes) plus generic styled objects
//! - **Registry**: identifier to live object lookup
//! - **Document**: page draw list, group membership, line ⇄ polyline
//!   conversion and the active edit target
//! - **Commands**: one undoable command per user edit
//! - **History**: linear undo/redo stack
//! - **Editor State**: user actions that edit the document and record history
//!
//! ## Architecture
//!
//! ```text
//! EditorState
//!   ├── Document
//!   │     └── ObjectRegistry (ObjectId -> EditableObject)
//!   ├── UndoStack
//!   │     └── RecordedCommand (DesignerCommand + already-applied flag)
//!   └── ModeTracker (shared with every command)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use prototyper_core::Segment;
//! use prototyper_designer::{EditMode, EditorState};
//!
//! let mut editor = EditorState::new();
//! let line = editor.create_line(Segment::from_coords(0.0, 0.0, 10.0, 0.0)).unwrap();
//! editor
//!     .add_segment(&line, Segment::from_coords(10.0, 0.0, 10.0, 10.0))
//!     .unwrap();
//! assert!(editor.document.find(&line).unwrap().as_polyline().is_some());
//!
//! editor.undo();
//! assert!(editor.document.find(&line).unwrap().as_line().is_some());
//! assert_eq!(editor.mode(), EditMode::Polyline);
//! ```

pub mod commands;
pub mod document;
pub mod editor_state;
pub mod history;
pub mod mode;
pub mod model;
pub mod registry;

pub use commands::{DesignerCommand, RecordedCommand};
pub use document::{ActiveTarget, Document, RemovedObject, Slot};
pub use editor_state::{EditorOptions, EditorState};
pub use history::{UndoStack, DEFAULT_HISTORY_LIMIT};
pub use mode::{EditMode, ModeController, ModeTracker};
pub use model::{EditableObject, ObjectKind, ObjectShape};
pub use registry::ObjectRegistry;
