use anyhow::{Context, Result};
use std::{
    fs::{File, OpenOptions},
    path::Path,
};
use strum::{Display, EnumString};

/// What happens to an existing output file.
///
/// `Append` keeps earlier content, so running twice leaves every chapter in
/// the file twice. Use `Truncate` to regenerate the file from scratch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum WriteMode {
    #[default]
    Append,
    Truncate,
}

impl WriteMode {
    pub fn open(self, path: &Path) -> Result<File> {
        let mut options = OpenOptions::new();
        options.create(true);
        match self {
            WriteMode::Append => options.append(true),
            WriteMode::Truncate => options.write(true).truncate(true),
        };

        options
            .open(path)
            .with_context(|| format!("failed to open {} ({})", path.display(), self))
    }
}
