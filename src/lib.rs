//! # Prototyper
//!
//! Core of a desktop mockup editor: forms built from buttons, checkboxes,
//! radio buttons and spin boxes, plus lines, polylines and groups, edited
//! through an undoable command layer.
//!
//! ## Architecture
//!
//! Prototyper is organized as a workspace with multiple crates:
//!
//! 1. **prototyper-core** - Identifiers, geometry, styles, error types
//! 2. **prototyper-designer** - Object model, document, commands, undo stack
//! 3. **prototyper-settings** - Editor configuration files
//! 4. **prototyper** - Logging setup and the headless session runner

pub mod session;

pub use prototyper_core::{Error, ObjectId, Point, Result, Segment};
pub use prototyper_designer as designer;
pub use prototyper_designer::{
    DesignerCommand, Document, EditMode, EditorOptions, EditorState, ModeController, UndoStack,
};
pub use prototyper_settings::{Config, EditorSettings, HistorySettings, LoggingSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Editor options derived from the loaded configuration.
pub fn editor_options(config: &Config) -> EditorOptions {
    EditorOptions {
        grid_step: config.editor.grid_step,
        duplicate_offset_steps: config.editor.duplicate_offset_steps,
        history_limit: config.history.limit,
    }
}

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Console output, pretty or JSON lines
/// - RUST_LOG environment variable support, falling back to the configured level
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.level.to_ascii_lowercase()))?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
