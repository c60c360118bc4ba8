use anyhow::Result;
use mealswipe_menu::{MenuDisplay, render_menu};

use super::FilterArgs;

/// Render the menu as it first appears for the given preferences.
#[tracing::instrument(skip(config))]
pub fn show(config: &crate::config::Config, filters: &FilterArgs) -> Result<String> {
    let catalog = super::load_catalog(config)?;
    let mut menu = MenuDisplay::new(catalog);
    menu.set_criteria(filters.criteria());

    Ok(render_menu(&menu.render(), config.display.card_width))
}
