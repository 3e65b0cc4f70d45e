use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use keepsake::Repository;

#[derive(Parser)]
#[command(
    name = "keepsake",
    version = "0.1.0",
    about = "Reproducible snapshots of a git working tree",
    long_about = "keepsake captures the exact state of a git working tree as a durable, \
    addressable commit, without touching the current branch, the staging area, \
    or any file contents. Snapshots are anchored with uniquely named branches \
    so they survive garbage collection.",
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
        name = "snapshot",
        about = "Capture the current tracked-file state as an anchored commit",
        long_about = "This command captures the tracked-file state of the working tree \
        (staged and unstaged edits included, untracked files omitted) as a commit \
        anchored by a uniquely named branch, and prints the commit hash. \
        A clean working tree short-circuits to the current commit unless --force is given."
    )]
    Snapshot {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
        #[arg(short, long, help = "Namespace prefix for the anchor branch name")]
        prefix: Option<String>,
        #[arg(short, long, help = "Capture even when the working tree is clean")]
        force: bool,
    },
    #[command(
        name = "head",
        about = "Print the most recent commit hash",
        long_about = "This command prints the commit hash of HEAD regardless of \
        working tree state. It fails when the repository has no commits."
    )]
    Head {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "ensure",
        about = "Fail when uncommitted changes exist, print the commit hash otherwise",
        long_about = "This command verifies that the working tree is fully committed. \
        On success it prints the commit hash of HEAD; otherwise it lists every \
        changed path and exits non-zero."
    )]
    Ensure {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
}

fn repository(path: &Option<String>) -> Repository {
    match path {
        Some(path) => Repository::open(path),
        None => Repository::current(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Snapshot {
            path,
            prefix,
            force,
        } => {
            let commit = repository(path).capture(prefix.as_deref(), *force)?;
            println!("{commit}");
        }
        Commands::Head { path } => {
            let commit = repository(path).most_recent_commit()?;
            println!("{commit}");
        }
        Commands::Ensure { path } => match repository(path).ensure_tracked() {
            Ok(commit) => println!("{commit}"),
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
