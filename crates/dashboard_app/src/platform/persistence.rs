use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use dashboard_core::Location;
use dashboard_engine::AtomicFileWriter;
use dashboard_logging::{dash_error, dash_info, dash_warn};
use serde::{Deserialize, Serialize};

const LOCATION_FILENAME: &str = ".dashboard_location.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedLocation {
    href: String,
    saved_utc: String,
}

/// Address saved by a previous run, if any.
pub(crate) fn load_location(state_dir: &Path) -> Option<Location> {
    let path = state_dir.join(LOCATION_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
        Err(err) => {
            dash_warn!("Failed to read persisted location from {:?}: {}", path, err);
            return None;
        }
    };

    let persisted: PersistedLocation = match ron::from_str(&content) {
        Ok(persisted) => persisted,
        Err(err) => {
            dash_warn!("Failed to parse persisted location from {:?}: {}", path, err);
            return None;
        }
    };

    dash_info!(
        "Restored location {} saved at {}",
        persisted.href,
        persisted.saved_utc
    );
    Some(Location::parse(&persisted.href))
}

pub(crate) fn save_location(state_dir: &Path, location: &Location) {
    let persisted = PersistedLocation {
        href: location.href(),
        saved_utc: Utc::now().to_rfc3339(),
    };

    let content = match ron::ser::to_string_pretty(&persisted, ron::ser::PrettyConfig::new()) {
        Ok(text) => text,
        Err(err) => {
            dash_error!("Failed to serialize location: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(PathBuf::from(state_dir));
    if let Err(err) = writer.write(LOCATION_FILENAME, &content) {
        dash_error!("Failed to persist location to {:?}: {}", state_dir, err);
    }
}
