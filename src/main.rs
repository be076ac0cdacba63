//! pathos - interactive PATH editor

use anyhow::Result;
use clap::Parser;

use pathos::cli::{actions, Cli, Context};
use pathos::env_file::ProcessEnv;
use pathos::terminal::ConsoleTerminal;
use pathos::PathEditor;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle --config early (opens pathos config file in editor)
    if cli.config {
        let config_path = pathos::config::ensure_config_file()?;
        let editor = std::env::var("EDITOR").unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "vi".to_string()
            }
        });
        std::process::Command::new(&editor)
            .arg(&config_path)
            .status()?;
        return Ok(());
    }

    let ctx = Context::from_cli(&cli)?;

    if cli.print {
        return actions::print::execute(&ctx, &ProcessEnv);
    }

    let mut editor = PathEditor::open(ctx.env_file.clone(), &ProcessEnv, ctx.messages)?;
    let wrote_file = editor.run(&mut ConsoleTerminal::new())?;

    if wrote_file {
        ctx.print_success(
            &ctx.messages
                .saved_to
                .replace("{}", &ctx.env_file.path().display().to_string()),
        );
        ctx.print_reload_hint();
    } else {
        ctx.print_warning(ctx.messages.discarded);
    }

    Ok(())
}
