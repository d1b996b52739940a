use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use galendario_parser::Calendar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ics,
    Json,
}

pub fn render<W: Write>(
    calendar: &Calendar,
    format: Format,
    stamp: DateTime<Utc>,
    mut writer: W,
) -> Result<()> {
    match format {
        Format::Ics => calendar.write_ics(stamp, &mut writer)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, calendar)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Writes to `path`, or stdout when there is none.
pub fn write(
    calendar: &Calendar,
    format: Format,
    stamp: DateTime<Utc>,
    path: Option<&Path>,
) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            render(calendar, format, stamp, BufWriter::new(file))
                .with_context(|| format!("could not write {}", path.display()))
        }
        None => render(calendar, format, stamp, io::stdout().lock()),
    }
}
