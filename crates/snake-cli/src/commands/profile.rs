//! Profile management commands: new, show, configure, delete.

use anyhow::{Result, bail};
use snake_core::{Configuration, PlayerProfile, ProfileStore};
use tracing::info;

use crate::cli::BoardOptions;

impl BoardOptions {
    /// Overlay the given options onto a configuration
    pub fn apply(&self, config: &mut Configuration) {
        let rows = self.rows.unwrap_or(config.rows());
        let cols = self.cols.unwrap_or(config.cols());
        config.set_board_size(rows, cols);
        if let Some(tick) = self.tick {
            config.set_tick_interval_ms(tick);
        }
        if let Some(color) = self.color {
            config.set_color_capable(color);
        }
    }
}

pub fn create(store: &ProfileStore, name: &str, board: &BoardOptions, force: bool) -> Result<()> {
    if store.exists(name) && !force {
        bail!("Profile '{}' already exists (use --force to replace it)", name);
    }

    let mut profile = PlayerProfile::new(name);
    let mut config = profile.configuration();
    board.apply(&mut config);
    profile.set_configuration(config);

    let path = store.try_save(&profile)?;
    println!("Created profile '{}' at {}", name, path.display());
    Ok(())
}

pub fn show(store: &ProfileStore, name: &str) -> Result<()> {
    let profile = store.try_load(name)?;
    print!("{}", profile.render_profile());
    Ok(())
}

pub fn configure(store: &ProfileStore, name: &str, board: &BoardOptions) -> Result<()> {
    let mut profile = store.try_load(name)?;
    let mut config = profile.configuration();
    board.apply(&mut config);
    profile.set_configuration(config);

    store.try_save(&profile)?;
    info!("Updated configuration for '{}'", name);
    println!("{}: {}", name, profile.configuration());
    Ok(())
}

pub fn delete(store: &ProfileStore, name: &str) -> Result<()> {
    if !store.delete(name)? {
        bail!("Profile '{}' not found", name);
    }
    println!("Deleted profile '{}'", name);
    Ok(())
}
