use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::process;
use todolist::cli::{Cli, Commands};
use todolist::cli_handlers::{self, ExportChanges};
use todolist::config::Config;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::default()
        .with_default_title(cli.default_title)
        .with_due_format(cli.due_format)?;

    match cli.command {
        Commands::Show {
            file,
            done,
            pending,
        } => cli_handlers::handle_show(&file, done, pending, &config)
            .with_context(|| in_file(&file)),
        Commands::Status { file } => {
            cli_handlers::handle_status(&file, &config).with_context(|| in_file(&file))
        }
        Commands::Find { file, title } => {
            cli_handlers::handle_find(&file, &title, &config).with_context(|| in_file(&file))
        }
        Commands::Item { file, position } => {
            cli_handlers::handle_item(&file, position, &config).with_context(|| in_file(&file))
        }
        Commands::Export {
            file,
            mark_done,
            mark_all_done,
            mark_all_undone,
            remove_at,
        } => {
            let changes = ExportChanges {
                mark_done,
                mark_all_done,
                mark_all_undone,
                remove_at,
            };
            cli_handlers::handle_export(&file, &changes, &config)
                .with_context(|| in_file(&file))
        }
    }
}

fn in_file(file: &Path) -> String {
    format!("in {}", file.display())
}
