//! ExpoPlan command-line entry point (native).

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use expoplan_core::DEFAULT_PLAN_FILE_NAME;
use expoplan_core::storage::FileStorage;

#[derive(Parser, Debug)]
#[command(name = "expoplan", about = "Inspect and store ExpoPlan floor plans", version)]
struct Cli {
    /// Plan storage directory (defaults to the platform data directory).
    #[arg(long, global = true, env = "EXPOPLAN_DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print counts and company assignments for a plan file.
    Inspect {
        file: PathBuf,
        /// Also print the info text of every booth.
        #[arg(long)]
        booths: bool,
    },
    /// List stored plan ids.
    List,
    /// Import a plan file into storage.
    Store {
        file: PathBuf,
        /// Id to store under (defaults to the file stem).
        #[arg(long)]
        id: Option<String>,
    },
    /// Export a stored plan to a file.
    Fetch {
        id: String,
        #[arg(default_value = DEFAULT_PLAN_FILE_NAME)]
        out: PathBuf,
    },
    /// Delete a stored plan.
    Delete { id: String },
}

fn open_storage(dir: Option<PathBuf>) -> Result<FileStorage> {
    let storage = match dir {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::default_location(),
    }
    .context("failed to open plan storage")?;
    log::debug!("Using plan storage at {}", storage.base_path().display());
    Ok(storage)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Inspect { file, booths } => {
            let plan = commands::read_plan(&file)?;
            print!("{}", commands::summarize(&plan));
            if booths {
                for text in commands::booth_summaries(plan) {
                    println!("\n{text}");
                }
            }
        }
        Command::List => {
            let storage = open_storage(cli.dir)?;
            for id in pollster::block_on(commands::list(&storage))? {
                println!("{id}");
            }
        }
        Command::Store { file, id } => {
            let storage = open_storage(cli.dir)?;
            let id = pollster::block_on(commands::store(&storage, &file, id))?;
            println!("Stored {} as {id}", file.display());
        }
        Command::Fetch { id, out } => {
            let storage = open_storage(cli.dir)?;
            pollster::block_on(commands::fetch(&storage, &id, &out))?;
            println!("Wrote {id} to {}", out.display());
        }
        Command::Delete { id } => {
            let storage = open_storage(cli.dir)?;
            pollster::block_on(commands::delete(&storage, &id))?;
            println!("Deleted {id}");
        }
    }

    Ok(())
}
