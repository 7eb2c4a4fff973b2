//! Editing mode controller.
//!
//! Commands notify a [`ModeController`] on every undo/redo so the active
//! tool matches the object state after the history jump. The controller is
//! injected into each command as a [`Shared`](prototyper_core::Shared)
//! trait object.

/// Tools the editor can be in.
///
/// Commands only ever request `Select` or `Polyline`. The other tools are
/// chosen from the toolbar through [`ModeTracker::set_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Select,
    Line,
    Polyline,
    Text,
    Pan,
}

/// Receives mode switches requested by commands.
pub trait ModeController {
    fn switch_to_select_mode(&mut self);
    fn switch_to_polyline_mode(&mut self);

    fn switch_to(&mut self, mode: EditMode) {
        match mode {
            EditMode::Polyline => self.switch_to_polyline_mode(),
            EditMode::Select => self.switch_to_select_mode(),
            other => {
                tracing::warn!("No command switches to {:?} mode, using Select", other);
                self.switch_to_select_mode();
            }
        }
    }
}

/// Headless mode controller that records the current mode.
#[derive(Debug, Clone, Default)]
pub struct ModeTracker {
    mode: EditMode,
    switches: usize,
}

impl ModeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Sets the mode directly, as the toolbar does. Not counted as a switch.
    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    /// Number of switches requested by commands.
    pub fn switch_count(&self) -> usize {
        self.switches
    }
}

impl ModeController for ModeTracker {
    fn switch_to_select_mode(&mut self) {
        self.mode = EditMode::Select;
        self.switches += 1;
    }

    fn switch_to_polyline_mode(&mut self) {
        self.mode = EditMode::Polyline;
        self.switches += 1;
    }
}
