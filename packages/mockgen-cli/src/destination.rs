//! Where generated mocks are written.

use anyhow::{bail, Context};
use gomockgen::imports::sanitize;
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// A generated mock file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMock {
    /// Name of the mocked package.
    pub package: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
    /// One `mock_<package>.go` per model.
    Directory(PathBuf),
}

impl Destination {
    /// Checks that `models` outputs can be told apart at this destination.
    pub fn check_model_count(&self, models: usize) -> anyhow::Result<()> {
        match self {
            Destination::Directory(_) => Ok(()),
            _ if models > 1 => bail!("{} models given; use --out-dir to write several mocks", models),
            _ => Ok(()),
        }
    }

    /// Path the mock for `package` is written to, or `None` for stdout.
    pub fn path_for(&self, package: &str) -> Option<PathBuf> {
        match self {
            Destination::Stdout => None,
            Destination::File(path) => Some(path.clone()),
            Destination::Directory(dir) => Some(dir.join(file_name(package))),
        }
    }

    /// Writes every mock. All target paths are checked before the first
    /// write, so a clash leaves the destination untouched.
    pub fn write(&self, mocks: &[GeneratedMock]) -> anyhow::Result<()> {
        self.check_model_count(mocks.len())?;

        let mut seen = HashSet::new();
        let mut planned = Vec::with_capacity(mocks.len());
        for mock in mocks {
            let path = self.path_for(&mock.package);
            if let Some(path) = &path {
                if !seen.insert(path.clone()) {
                    bail!("two models would both write {}", path.display());
                }
            }
            planned.push((mock, path));
        }

        for (mock, path) in planned {
            match path {
                Some(path) => {
                    write_file(&path, &mock.source)?;
                    info!(package = %mock.package, path = %path.display(), "wrote mock");
                }
                None => {
                    let stdout = std::io::stdout();
                    let mut out = stdout.lock();
                    out.write_all(mock.source.as_bytes())
                        .context("failed to write to stdout")?;
                }
            }
        }
        Ok(())
    }
}

/// `mock_<package>.go`
pub fn file_name(package: &str) -> String {
    format!("mock_{}.go", sanitize(package))
}

fn write_file(path: &Path, source: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("unable to create directory {}", dir.display()))?;
    }
    fs::write(path, source).with_context(|| format!("failed writing to {}", path.display()))
}
