//! Handing a generated .ics document to a file-save mechanism.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{SeatplanError, SeatplanResult};
use crate::event::CalendarEvent;
use crate::ics::{ICS_CONTENT_TYPE, generate_ics};

const ICS_EXTENSION: &str = ".ics";

/// A calendar file ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsFile {
    pub filename: String,
    pub content_type: &'static str,
    pub content: String,
}

impl IcsFile {
    pub fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// The platform's way of saving a file for the user.
pub trait FileSaver {
    /// Save `file` and return where it ended up.
    fn save(&self, file: &IcsFile) -> SeatplanResult<PathBuf>;
}

/// Saves files into a directory.
///
/// Content is staged in a temporary file next to the destination and renamed
/// into place, so a failed save never leaves a partial `.ics` behind.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySaver { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSaver for DirectorySaver {
    fn save(&self, file: &IcsFile) -> SeatplanResult<PathBuf> {
        if !is_plain_filename(&file.filename) {
            return Err(SeatplanError::InvalidFilename(file.filename.clone()));
        }

        std::fs::create_dir_all(&self.dir)?;

        let destination = self.dir.join(&file.filename);

        // Dropping the temp file on any early return removes it
        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(file.bytes())?;
        staged.flush()?;
        staged.persist(&destination)?;

        tracing::info!(path = %destination.display(), "saved calendar file");
        Ok(destination)
    }
}

/// A single normal path component: no separators, no `.`/`..`, no root.
fn is_plain_filename(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Generate the event's .ics document and save it with `saver`.
///
/// The filename is `filename` when given, otherwise derived from the title;
/// `.ics` is always appended. Save errors are returned unchanged.
pub fn download_ics(
    event: &CalendarEvent,
    filename: Option<&str>,
    saver: &impl FileSaver,
) -> SeatplanResult<PathBuf> {
    let file = IcsFile {
        filename: ics_filename(&event.title, filename),
        content_type: ICS_CONTENT_TYPE,
        content: generate_ics(event),
    };

    tracing::debug!(
        filename = %file.filename,
        bytes = file.content.len(),
        "handing calendar file to saver"
    );
    saver.save(&file)
}

/// `<name>.ics`, where `name` is the override or the title with every
/// non-alphanumeric character replaced by `_`.
pub fn ics_filename(title: &str, filename: Option<&str>) -> String {
    let stem = match filename {
        Some(name) => name.to_string(),
        None => title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect(),
    };

    format!("{stem}{ICS_EXTENSION}")
}
