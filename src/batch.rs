//! Batch driver - finds PEP sources in a directory and renders each one.

use crate::converter::PepToHtml;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// File name pattern of PEP sources.
pub const SOURCE_PATTERN: &str = "pep-*.txt";

/// Outcome of a batch run. A failed document does not stop the batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Pages written, in processing order.
    pub written: Vec<PathBuf>,
    /// One entry per document that failed.
    pub failures: Vec<Error>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Lists the PEP sources in `dir`, sorted by path.
pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let escaped_dir = glob::Pattern::escape(&dir.as_ref().to_string_lossy());
    let pattern = Path::new(&escaped_dir).join(SOURCE_PATTERN);

    let mut sources = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        sources.push(entry?);
    }
    sources.sort();
    log::debug!("found {} sources matching {}", sources.len(), pattern.display());
    Ok(sources)
}

/// `pep-0008.txt` -> `pep-0008.html`, in the same directory.
pub fn output_path<P: AsRef<Path>>(source: P) -> PathBuf {
    source.as_ref().with_extension("html")
}

/// Renders every source next to itself. `on_start` runs before each document
/// with the source and output paths.
pub fn convert_all<F>(converter: &PepToHtml, sources: &[PathBuf], mut on_start: F) -> BatchReport
where
    F: FnMut(&Path, &Path),
{
    let mut report = BatchReport::default();

    for source in sources {
        let target = output_path(source);
        on_start(source, &target);

        match converter.convert_file(source, &target) {
            Ok(()) => report.written.push(target),
            Err(e) => {
                log::error!("failed to convert {}: {}", source.display(), e);
                report.failures.push(Error::Conversion {
                    path: source.clone(),
                    source: Box::new(e),
                });
            }
        }
    }

    log::info!(
        "converted {} of {} documents",
        report.written.len(),
        sources.len()
    );
    report
}
