//! List stored profiles.

use anyhow::Result;
use snake_core::ProfileStore;

pub fn run(store: &ProfileStore) -> Result<()> {
    let names = store.list_profiles()?;
    if names.is_empty() {
        println!("No profiles in {}", store.base_dir().display());
        return Ok(());
    }

    for name in names {
        match store.load(&name) {
            Some(profile) => println!(
                "{}\tbest {:.3}\t{} sessions",
                name,
                profile.best_score(),
                profile.session_count()
            ),
            None => println!("{}\t(unreadable)", name),
        }
    }
    Ok(())
}
