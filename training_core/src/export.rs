//! CSV export of a training schedule.

use crate::calendar::weekday_name;
use crate::{Result, ScheduleEntry};
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow<'a> {
    date: String,
    weekday: &'static str,
    workout_type: &'a str,
    focus_type: Option<&'a str>,
    official_program_id: Option<&'a str>,
    official_workout_id: Option<&'a str>,
    workout_id: Option<String>,
}

impl<'a> From<&'a ScheduleEntry> for CsvRow<'a> {
    fn from(entry: &'a ScheduleEntry) -> Self {
        CsvRow {
            date: entry.workout_date.format("%Y-%m-%d").to_string(),
            weekday: weekday_name(entry.workout_date),
            workout_type: &entry.workout_type,
            focus_type: entry.focus_type.as_deref(),
            official_program_id: entry.official_program_id.as_deref(),
            official_workout_id: entry.official_workout_id.as_deref(),
            workout_id: entry.workout_id.map(|id| id.to_string()),
        }
    }
}

/// Write schedule entries to `path` as CSV with a header row.
///
/// The file is replaced, flushed and synced to disk. Returns the number of
/// rows written.
pub fn write_schedule_csv(entries: &[ScheduleEntry], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(file);

    for entry in entries {
        writer.serialize(CsvRow::from(entry))?;
    }

    // Headers are only emitted with the first row
    if entries.is_empty() {
        writer.write_record([
            "date",
            "weekday",
            "workout_type",
            "focus_type",
            "official_program_id",
            "official_workout_id",
            "workout_id",
        ])?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Exported {} schedule entries to {:?}", entries.len(), path);
    Ok(entries.len())
}
