mod cli;
mod grid_view;
mod prompts;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use inquire::InquireError;

use quadrant_core::{ControllerError, GridConfig, GridLayout, ProjectFields, Session};

use crate::cli::Cli;
use crate::prompts::{EditAction, IdleAction};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GridConfig::load(path)?,
        None => {
            let (config, path) = GridConfig::discover()?;
            if let Some(path) = path {
                log::info!("Loaded config from {:?}", path);
            }
            config
        }
    };
    if let Some(layout) = &cli.layout {
        config.layout = GridLayout::from_label(layout)
            .with_context(|| format!("Unknown layout '{}', expected 2x2 or 4x4", layout))?;
    }

    let session = match cli.seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config),
    };

    match run(session) {
        Err(e) if is_cancelled(&e) => {
            println!("{}", "Bye.".dimmed());
            Ok(())
        }
        other => other,
    }
}

/// Esc or Ctrl-C inside a prompt ends the session quietly
fn is_cancelled(e: &anyhow::Error) -> bool {
    matches!(
        e.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled) | Some(InquireError::OperationInterrupted)
    )
}

fn run(mut session: Session) -> Result<()> {
    loop {
        // Every request cycle starts from a fresh render
        let frame = session.render();
        let config = session.config().clone();
        grid_view::print_frame(&frame, &config.dot_sizes, |q| config.quadrant_label(q));
        let four_way = config.layout == GridLayout::FourByFour;

        match prompts::prompt_idle_action()? {
            IdleAction::Add => {
                session.open_add();
                let fields = prompts::prompt_fields(None, four_way)?;
                match session.add(fields) {
                    Ok(index) => println!(
                        "{}",
                        format!("Project added as point {}", index).green()
                    ),
                    Err(e) => println!("{}", e.to_string().red()),
                }
            }
            IdleAction::Select => {
                let point = prompts::prompt_point()?;
                let selected = match session.select_point(point) {
                    Ok(project) => project.clone(),
                    Err(e) => {
                        println!("{}", e.to_string().red());
                        continue;
                    }
                };
                edit_selected(&mut session, &selected.fields(), four_way)?;
            }
            IdleAction::Json => {
                let json = serde_json::to_string_pretty(session.projects())?;
                println!("{}", json);
            }
            IdleAction::Quit => return Ok(()),
        }
    }
}

fn edit_selected(
    session: &mut Session,
    current: &ProjectFields,
    four_way: bool,
) -> Result<()> {
    match prompts::prompt_edit_action(&current.name)? {
        EditAction::Save => loop {
            let fields = prompts::prompt_fields(Some(current), four_way)?;
            match session.save_edit(fields) {
                Ok(_) => {
                    println!("{}", "Project updated.".green());
                    break;
                }
                // The selection is still open, so let the user fix the form
                Err(e @ ControllerError::Validation(_)) => println!("{}", e.to_string().red()),
                Err(e) => {
                    println!("{}", e.to_string().red());
                    break;
                }
            }
        },
        EditAction::Delete => {
            let confirm = inquire::Confirm::new("Are you sure you want to delete this project?")
                .with_default(false)
                .prompt()?;
            if !confirm {
                println!("{}", "Deletion cancelled.".yellow());
                session.cancel();
                return Ok(());
            }
            match session.delete_selected() {
                Ok(removed) => println!("{}", format!("Deleted '{}'.", removed.name).green()),
                Err(e) => println!("{}", e.to_string().red()),
            }
        }
        EditAction::Cancel => session.cancel(),
    }
    Ok(())
}
