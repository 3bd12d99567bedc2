mod config;
pub mod planner_db;

pub use config::{Config, LocationConfig, PrayerConfig};
pub use planner_db::PlannerDb;

use std::path::PathBuf;

/// Returns the waqt data directory, creating it if needed.
///
/// `WAQT_DATA_DIR` overrides the location outright; otherwise this is
/// `~/.config/waqt/`, or `~/.config/waqt-dev/` when `WAQT_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(dir) = std::env::var("WAQT_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WAQT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("waqt-dev")
    } else {
        base_dir.join("waqt")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
