use std::io::Write;
use std::path::PathBuf;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::RuntimeConfig;
use crate::counter::{self, CountError, Tally};
use crate::ext::{PathExt, PathResolutionError};
use crate::footer::{self, FooterError, FooterTally};
use crate::manifest::{self, ManifestError};

pub struct Application;

impl Application {
    /// Counts files and folders below the root and prints the summary.
    pub fn count(config: &RuntimeConfig, out: &mut impl Write) -> Result<Tally, ApplicationError> {
        let root = Self::resolve_root(config)?;

        let tally = counter::count(&root).context(CountSnafu)?;
        debug!("Counted {tally:?}");

        write!(out, "{}", tally.report(&root)).context(ReportSnafu)?;
        Ok(tally)
    }

    /// Writes `info.txt` into every folder below the root and confirms once done.
    pub fn write_manifests(
        config: &RuntimeConfig,
        out: &mut impl Write,
    ) -> Result<usize, ApplicationError> {
        let root = Self::resolve_root(config)?;

        let written = manifest::write_manifests(&root).context(ManifestSnafu)?;
        debug!("Wrote {written} manifests");

        writeln!(out, "✅ Файлы info.txt успешно созданы во всех папках проекта!")
            .context(ReportSnafu)?;
        Ok(written)
    }

    /// Appends the source banner to every eligible file below the root.
    pub fn stamp_footers(
        config: &RuntimeConfig,
        out: &mut impl Write,
    ) -> Result<FooterTally, ApplicationError> {
        let root = Self::resolve_root(config)?;

        writeln!(out, "📂 Обработка проекта: {}", root.display()).context(ReportSnafu)?;
        let tally = footer::stamp_footers(&root).context(FooterSnafu)?;
        writeln!(out, "✅ Комментарии добавлены: {}", tally.added).context(ReportSnafu)?;
        writeln!(out, "⏭ Пропущено файлов: {}", tally.skipped).context(ReportSnafu)?;

        Ok(tally)
    }

    fn resolve_root(config: &RuntimeConfig) -> Result<PathBuf, ApplicationError> {
        let root = config.root.absolutize().context(ResolveRootSnafu)?;
        debug!("Resolved root {} to {}", config.root.display(), root.display());
        Ok(root)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to resolve the project root"))]
    ResolveRootError { source: PathResolutionError },
    #[snafu(display("Critical failure encountered while counting"))]
    CountError { source: CountError },
    #[snafu(display("Critical failure encountered while writing manifests"))]
    ManifestError { source: ManifestError },
    #[snafu(display("Critical failure encountered while stamping footers"))]
    FooterError { source: FooterError },
    #[snafu(display("Failed to print the report"))]
    ReportError { source: std::io::Error },
}
