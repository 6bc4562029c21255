use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ty", about = concat!("[/] tally v", env!("CARGO_PKG_VERSION"), " - daily habits, seven days at a glance"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory with a default config
    Init(InitArgs),
    /// Add a new habit
    Add(AddArgs),
    /// List habits with the seven-day grid and streaks
    List,
    /// Mark a habit done for a day (default: today)
    Tick(DayArgs),
    /// Clear a habit's mark for a day (default: today)
    Untick(DayArgs),
    /// Flip a habit's mark for a day (default: today)
    Toggle(DayArgs),
    /// Print a habit's current streak
    Streak(StreakArgs),
    /// Delete a habit and its whole log
    Delete(DeleteArgs),
    /// Delete all habits and logs
    Reset(ResetArgs),
    /// Export all data to a JSON file
    Export(ExportArgs),
    /// Import a previously exported JSON file, replacing all data
    Import(ImportArgs),
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Rewrite config.toml even if it already exists
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Habit command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Habit name
    pub name: String,
}

#[derive(Args)]
pub struct DayArgs {
    /// Habit name (case-insensitive)
    pub name: String,
    /// Date key to change (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args)]
pub struct StreakArgs {
    /// Habit name (case-insensitive)
    pub name: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Habit name (case-insensitive)
    pub name: String,
    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

// ---------------------------------------------------------------------------
// Transfer args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ExportArgs {
    /// Output path (default: habits-export.json in the current directory)
    pub path: Option<String>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file to import
    pub file: String,
}
