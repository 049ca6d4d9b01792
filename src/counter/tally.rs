use std::fmt;
use std::path::Path;

use derive_more::{Add, AddAssign};

/// Running totals of one counter run. The root itself is never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Add, AddAssign)]
pub struct Tally {
    pub files: u64,
    pub folders: u64,
}

impl Tally {
    pub fn new(files: u64, folders: u64) -> Self {
        Self { files, folders }
    }

    pub fn total(&self) -> u64 {
        self.files + self.folders
    }

    /// Console summary for a run rooted at `root`.
    pub fn report<'a>(&'a self, root: &'a Path) -> TallyReport<'a> {
        TallyReport { tally: self, root }
    }
}

pub struct TallyReport<'a> {
    tally: &'a Tally,
    root: &'a Path,
}

impl fmt::Display for TallyReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "-----------------------------";

        writeln!(f, "📁 Анализ проекта: {}", self.root.display())?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Всего файлов:  {}", self.tally.files)?;
        writeln!(f, "Всего папок:   {}", self.tally.folders)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Итого элементов: {}", self.tally.total())
    }
}
