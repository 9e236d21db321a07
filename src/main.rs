use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use twig::areas::repository::Repository;
use twig::artifacts::branch::DEFAULT_BRANCH;
use twig::artifacts::branch::branch_name::BranchName;
use twig::config::LOG_ENV_VAR;

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny content-addressable version control system",
    long_about = "twig stores file snapshots as git-style blob, tree and commit objects. \
    It supports staging, committing and walking a linear history.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path. \
        Running it on an existing repository is safe."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
        #[arg(short = 'b', long = "initial-branch", default_value = DEFAULT_BRANCH, help = "Name of the initial branch")]
        branch: String,
    },
    #[command(
        name = "add",
        about = "Add file contents to the index",
        long_about = "This command stages files for the next commit. Directories are added recursively."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit in the repository with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit logs",
        long_about = "This command shows the commit history starting from HEAD, newest first."
    )]
    Log {
        #[arg(short = 'n', long = "max-count", help = "Limit the number of commits to show")]
        limit: Option<usize>,
    },
    #[command(
        name = "load-object",
        about = "Print the content of an object",
        long_about = "This command prints an object from the database. \
        Blobs are printed verbatim, trees and commits in a readable form."
    )]
    LoadObject {
        #[arg(index = 1, help = "The object id")]
        hash: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes a file as a blob and can write it to the object database."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;

    Ok(Repository::discover(pwd, Box::new(std::io::stdout()))?)
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, branch } => {
            let path = match path {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            let branch = BranchName::try_parse(branch)?;
            let repository = Repository::new(path, Box::new(std::io::stdout()))?;

            repository.init(&branch).await?
        }
        Commands::Add { paths } => open_repository()?.add(&paths).await?,
        Commands::Commit { message } => {
            open_repository()?.commit(&message).await?;
        }
        Commands::Log { limit } => open_repository()?.show_log(limit)?,
        Commands::LoadObject { hash } => open_repository()?.load_object(&hash)?,
        Commands::HashObject { write, file } => {
            let repository = if write {
                open_repository()?
            } else {
                // hashing alone does not need a repository
                let pwd = std::env::current_dir()?;
                Repository::new(pwd, Box::new(std::io::stdout()))?
            };

            repository.hash_object(&file, write)?
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
