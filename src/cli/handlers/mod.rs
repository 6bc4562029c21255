mod init;
pub use init::cmd_init;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::lock::DirLock;
use crate::io::store;
use crate::model::State;
use crate::ops::habit_ops;
use crate::ops::streak::current_streak;
use crate::ops::transfer;
use crate::util::dates::{self, date_key, parse_date_key};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = store::data_dir(cli.dir.as_deref().map(Path::new));

    match cli.command {
        // The TUI path is handled in main.rs before dispatch
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::Init(args) => cmd_init(args, &dir),

            // Read commands
            Commands::List => cmd_list(&dir, json),
            Commands::Streak(args) => cmd_streak(args, &dir, json),
            Commands::Export(args) => cmd_export(args, &dir),

            // Write commands
            Commands::Add(args) => cmd_add(args, &dir),
            Commands::Tick(args) => cmd_day_change(args, &dir, DayChange::Tick),
            Commands::Untick(args) => cmd_day_change(args, &dir, DayChange::Untick),
            Commands::Toggle(args) => cmd_day_change(args, &dir, DayChange::Toggle),
            Commands::Delete(args) => cmd_delete(args, &dir),
            Commands::Reset(args) => cmd_reset(args, &dir),
            Commands::Import(args) => cmd_import(args, &dir),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lock the data directory for a mutating command. Creates the directory
/// on first use so the lock file has somewhere to live.
fn lock_dir(dir: &Path) -> Result<DirLock, Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    Ok(DirLock::acquire_default(dir)?)
}

/// Resolve a `--date` flag, defaulting to today.
fn resolve_date(date: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        None => Ok(dates::today()),
        Some(raw) => parse_date_key(raw)
            .ok_or_else(|| format!("invalid date '{}' (expected YYYY-MM-DD)", raw).into()),
    }
}

/// Interactive yes/no prompt for destructive commands without --yes.
fn confirm(prompt: &str) -> Result<bool, Box<dyn std::error::Error>> {
    eprint!("{} [y/n] ", prompt);
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn save(dir: &Path, state: &State) -> Result<(), Box<dyn std::error::Error>> {
    store::write_state(dir, state)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = store::load_or_default(dir);
    let today = dates::today();

    if json {
        println!("{}", serde_json::to_string_pretty(&list_to_json(&state, today))?);
    } else {
        for line in format_grid(&state, today) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_streak(args: StreakArgs, dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let state = store::load_or_default(dir);
    let habit = habit_ops::find_by_name(&state, &args.name)?;
    let streak = current_streak(habit, dates::today());

    if json {
        let out = StreakJson {
            name: habit.name.clone(),
            streak,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", streak);
    }
    Ok(())
}

fn cmd_export(args: ExportArgs, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let state = store::load_or_default(dir);
    let path = args
        .path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(transfer::EXPORT_FILE_NAME));

    transfer::export_to_file(&state, &path)?;
    println!("exported {} habits to {}", state.habits.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = lock_dir(dir)?;
    let mut state = store::load_or_default(dir);

    let id = habit_ops::add_habit(&mut state, &args.name)?;
    save(dir, &state)?;
    println!("{}", id);
    Ok(())
}

/// What tick/untick/toggle do to the resolved (habit, day) entry.
enum DayChange {
    Tick,
    Untick,
    Toggle,
}

fn cmd_day_change(
    args: DayArgs,
    dir: &Path,
    change: DayChange,
) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = lock_dir(dir)?;
    let mut state = store::load_or_default(dir);

    let day = resolve_date(args.date.as_deref())?;
    let key = date_key(day);
    let id = habit_ops::find_by_name(&state, &args.name)?.id.clone();

    match change {
        DayChange::Tick => habit_ops::tick_day(&mut state, &id, &key)?,
        DayChange::Untick => habit_ops::untick_day(&mut state, &id, &key)?,
        DayChange::Toggle => habit_ops::toggle_day(&mut state, &id, &key),
    }

    save(dir, &state)?;

    let habit = state.habit(&id).ok_or("habit disappeared during update")?;
    let mark = if habit.is_done(&key) { "done" } else { "clear" };
    println!("{} → {} on {}", habit.name, mark, key);
    Ok(())
}

fn cmd_delete(args: DeleteArgs, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = lock_dir(dir)?;
    let mut state = store::load_or_default(dir);

    let habit = habit_ops::find_by_name(&state, &args.name)?;
    let (id, name) = (habit.id.clone(), habit.name.clone());

    if !args.yes && !confirm(&format!("Delete \"{}\"?", name))? {
        println!("cancelled");
        return Ok(());
    }

    habit_ops::delete_habit(&mut state, &id)?;
    save(dir, &state)?;
    println!("deleted {}", name);
    Ok(())
}

fn cmd_reset(args: ResetArgs, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = lock_dir(dir)?;
    let mut state = store::load_or_default(dir);

    if !args.yes && !confirm("Delete all habits and logs?")? {
        println!("cancelled");
        return Ok(());
    }

    habit_ops::reset(&mut state);
    save(dir, &state)?;
    println!("All data reset.");
    Ok(())
}

fn cmd_import(args: ImportArgs, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let _lock = lock_dir(dir)?;

    let state = transfer::import_from_file(Path::new(&args.file))
        .map_err(|e| format!("import failed: {}", e))?;

    save(dir, &state)?;
    println!("Import complete. Data loaded. ({} habits)", state.habits.len());
    Ok(())
}
