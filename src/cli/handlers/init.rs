use std::fs;
use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::io::config_io::CONFIG_FILE;
use crate::io::store;
use crate::model::State;

const CONFIG_TOML_TEMPLATE: &str = r##"# tally configuration
# Everything here is optional; delete lines to fall back to defaults.

[ui]
# show the key-hint line at the bottom of the grid
show_key_hints = true

# --- Colors ---
# Uncomment and edit to override defaults (hex colors).
#
# [ui.colors]
# done = "#7FB069"
# missed = "#5A5580"
# today = "#FFD700"
# selection = "#FB4196"
# streak = "#44DDFF"
# dim = "#5A5580"
"##;

pub fn cmd_init(args: InitArgs, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;

    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() && !args.force {
        return Err(format!(
            "{} already exists (use --force to rewrite it)",
            config_path.display()
        )
        .into());
    }
    fs::write(&config_path, CONFIG_TOML_TEMPLATE)?;

    // Seed an empty state file on first init. Never clobber habit data:
    // --force only applies to the config.
    if store::read_state(dir).is_none() {
        store::write_state(dir, &State::default())?;
    }

    println!("Initialized tally data directory: {}", dir.display());
    Ok(())
}
