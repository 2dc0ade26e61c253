use super::format;
use super::LineBackend;
use crate::error::{DictError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(DictError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("dictionary");
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl LineBackend for FileBackend {
    fn read_lines(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path).map_err(DictError::Io)?;
        BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(DictError::Io)
    }

    fn append_line(&self, line: &str) -> Result<()> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(DictError::Io)?;
        file.write_all(format::format(&[line]).as_bytes())
            .map_err(DictError::Io)?;
        Ok(())
    }

    fn replace_lines(&self, lines: &[String]) -> Result<()> {
        self.ensure_parent()?;
        let tmp_path = self.tmp_path();

        let written = (|| -> std::io::Result<()> {
            let mut file = File::create(&tmp_path)?;
            file.write_all(format::format(lines).as_bytes())?;
            file.sync_all()
        })();

        if let Err(e) = written.and_then(|_| fs::rename(&tmp_path, &self.path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(DictError::Io(e));
        }

        Ok(())
    }
}
