//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    db::Database,
    error::{ItineraryError, Result},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    time_zone: Option<TimeZone>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            time_zone: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/itinera/itinera.db` or `~/.local/share/itinera/itinera.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the reference time zone for "today". Defaults to UTC.
    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    /// Sets the reference time zone from an IANA name such as
    /// `Asia/Tokyo`, or `UTC`.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::InvalidInput` if the name is unknown.
    pub fn with_time_zone_name(self, name: &str) -> Result<Self> {
        let time_zone = TimeZone::get(name).map_err(|e| {
            ItineraryError::invalid_input("time_zone")
                .with_reason(format!("unknown time zone '{name}': {e}"))
        })?;
        Ok(self.with_time_zone(time_zone))
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `ItineraryError::FileSystem` if the database directory cannot
    /// be created, `ItineraryError::XdgDirectory` if no default location can
    /// be resolved, and `ItineraryError::Database` if schema initialization
    /// fails.
    pub async fn build(self) -> Result<Planner> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ItineraryError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ItineraryError>(())
        })
        .await
        .map_err(|e| ItineraryError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let time_zone = self.time_zone.unwrap_or(TimeZone::UTC);
        debug!(
            "Planner ready at {} (time zone {})",
            db_path.display(),
            time_zone.iana_name().unwrap_or("fixed offset")
        );

        Ok(Planner::new(db_path, time_zone))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("itinera")
            .place_data_file("itinera.db")
            .map_err(|e| ItineraryError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
