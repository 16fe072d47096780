//! Command-line interface.

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "discovery-manage")]
#[command(about = "Course metadata maintenance commands")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Database URL; overrides DATABASE_URL
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Migrate URL slugs for a list of courses specified by UUID
    MigrateUrlSlugs(MigrateUrlSlugsArgs),
}

#[derive(Debug, Args)]
pub struct MigrateUrlSlugsArgs {
    /// UUIDs of courses to migrate
    pub courses: Vec<String>,

    /// Log the planned slugs without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}
