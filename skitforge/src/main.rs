#![warn(clippy::pedantic)]

pub mod actions;
pub mod global;
pub mod shell;

use anyhow::Result as AnyResult;
use skitforge_core::{
    io::{ProjectFolder, SkitStorage},
    EditorState,
};

/// Write back defaults for preference files the user doesn't have yet.
fn write_default_preferences() {
    let settings = global::settings::Settings::get();
    if settings.source().should_write_defaults() {
        if let Err(err) = settings.save() {
            log::warn!("Failed to write default settings: {err:#}");
        }
    }
    let hotkeys = global::hotkeys::Hotkeys::get();
    if hotkeys.source().should_write_defaults() {
        if let Err(err) = hotkeys.save() {
            log::warn!("Failed to write default hotkeys: {err:#}");
        }
    }
}

/// Read the project's definitions and skits into a fresh editor.
fn open_project(project: &ProjectFolder) -> AnyResult<EditorState> {
    let mut state = EditorState::new(
        skitforge_core::definitions::Registry::default(),
        global::settings::Settings::get().editor.clone(),
    );
    match project.load_commands_yaml() {
        // A schema that fails to parse leaves only the built-in group definitions.
        Ok(yaml) => match state.load_commands_yaml(&yaml) {
            Ok(problems) => {
                for problem in problems {
                    log::warn!("Command definitions: {problem}");
                }
            }
            Err(err) => log::error!("Command definitions are invalid: {err}"),
        },
        Err(err) => log::warn!("No command definitions loaded, {err}"),
    }
    state.load_skits(project.load_skits()?);
    Ok(state)
}

fn main() -> AnyResult<()> {
    let has_term = std::io::IsTerminal::is_terminal(&std::io::stdin());
    // Log to a terminal, if available. Else, log to "log.out" in the working directory.
    if has_term {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        let _ = simple_logging::log_to_file("log.out", log::LevelFilter::Debug);
    }
    write_default_preferences();

    // Args are the project folder to open, the working directory if none.
    let mut paths = std::env::args_os().skip(1).map(std::path::PathBuf::from);
    let root = paths.next().unwrap_or_else(|| ".".into());
    if paths.next().is_some() {
        log::warn!("Only one project may be open, ignoring the rest");
    }
    let project = ProjectFolder::open(&root)?;
    let state = open_project(&project)?;
    log::info!(
        "Opened project {:?} with {} skits",
        project.name(),
        state.skit_ids().len()
    );

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let mut shell = shell::Shell::new(state, project, global::hotkeys::Hotkeys::get());
    for line in std::io::BufRead::lines(std::io::stdin().lock()) {
        match runtime.block_on(shell.execute(&line?)) {
            Ok(shell::Reply::Quit) => break,
            Ok(shell::Reply::Print(text)) => println!("{text}"),
            Ok(shell::Reply::Quiet) => (),
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(())
}
