use std::path::PathBuf;

use prototyper::{editor_options, init_logging, session, Config, EditorState, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    // Optional config file path as the only argument
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load_or_default(config_path.as_deref())?;

    // Initialize logging
    init_logging(&config.logging)?;
    tracing::info!("Prototyper {} (built {})", VERSION, BUILD_DATE);

    let mut editor = EditorState::with_options(editor_options(&config));
    let report = session::run(&mut editor)?;
    tracing::info!(
        recorded = report.recorded,
        undone = report.undone,
        redone = report.redone,
        objects = report.objects,
        "Session complete"
    );

    Ok(())
}
