use sky_core::storage::TokenStorage;

use crate::Result;
use crate::cli::{SettingsCommand, Theme};
use crate::context::{AppContext, THEME_KEY};

pub fn run(ctx: &AppContext, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Theme { value: Some(theme) } => {
            ctx.storage.set(THEME_KEY, theme.as_str())?;
            println!("theme: {}", theme.as_str());
        }
        SettingsCommand::Theme { value: None } => show(ctx)?,
    }
    Ok(())
}

pub fn show(ctx: &AppContext) -> Result<()> {
    println!("theme: {}", current_theme(ctx.storage.as_ref())?.as_str());
    Ok(())
}

/// Stored theme; unknown or missing values mean light.
fn current_theme(storage: &dyn TokenStorage) -> Result<Theme> {
    Ok(match storage.get(THEME_KEY)?.as_deref() {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    })
}

#[cfg(test)]
mod tests {
    use sky_core::storage::MemoryStorage;

    use super::*;

    #[test]
    fn theme_defaults_to_light() {
        let storage = MemoryStorage::new();
        assert_eq!(current_theme(&storage).unwrap(), Theme::Light);

        storage.set(THEME_KEY, "dark").unwrap();
        assert_eq!(current_theme(&storage).unwrap(), Theme::Dark);

        storage.set(THEME_KEY, "neon").unwrap();
        assert_eq!(current_theme(&storage).unwrap(), Theme::Light);
    }
}
