use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use focal::cli::args::{Cli, Commands};
use focal::cli::commands;
use focal::config::Config;
use focal::store::{
    MemorySessionStore, MemoryTaskStore, SessionStore, SqliteSessionStore, SqliteTaskStore,
    TaskStore,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;
    let config = Config::load()?;

    let (session_store, task_store): (Box<dyn SessionStore>, Box<dyn TaskStore>) = if cli.offline {
        (
            Box::new(MemorySessionStore::new()),
            Box::new(MemoryTaskStore::with_sample_data()),
        )
    } else {
        (
            Box::new(SqliteSessionStore::open()?),
            Box::new(SqliteTaskStore::open()?),
        )
    };

    let output = match cli.command {
        Commands::Start(args) => commands::start(
            session_store.as_ref(),
            task_store.as_ref(),
            &config,
            args,
            format,
        )?,
        Commands::Status => commands::status(session_store.as_ref(), format)?,
        Commands::History(args) => commands::history(session_store.as_ref(), args.limit, format)?,
        Commands::Stats(args) => commands::stats(
            session_store.as_ref(),
            task_store.as_ref(),
            &config,
            args.period,
            format,
        )?,
        Commands::Tasks(args) => {
            commands::tasks(task_store.as_ref(), cli.offline, args.command, format)?
        }
        Commands::Config(args) => commands::config(args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
