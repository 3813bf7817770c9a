//! Directory access port used by the login wizard.

use crate::error::DriveError;
use std::collections::HashMap;
use std::path::PathBuf;

/// A directory the learner granted access to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriveDirectory {
    pub name: String,
    pub path: PathBuf,
}

pub trait DriveAccess: Send {
    fn is_supported(&self) -> bool;

    /// Asks the learner for a directory (the root of their flash drive).
    fn request_directory(&mut self) -> Result<DriveDirectory, DriveError>;

    /// `Ok(None)` when the file does not exist.
    fn read_file(&self, dir: &DriveDirectory, name: &str) -> Result<Option<String>, DriveError>;

    fn write_file(
        &mut self,
        dir: &DriveDirectory,
        name: &str,
        contents: &str,
    ) -> Result<(), DriveError>;
}

/// Native folder picker plus plain filesystem access.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct FolderDrive;

#[cfg(not(target_arch = "wasm32"))]
impl DriveAccess for FolderDrive {
    fn is_supported(&self) -> bool {
        true
    }

    fn request_directory(&mut self) -> Result<DriveDirectory, DriveError> {
        let path = rfd::FileDialog::new()
            .set_title("Flash belleğinizin kök dizinini seçin")
            .pick_folder()
            .ok_or(DriveError::Cancelled)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Flash Bellek".to_string());
        Ok(DriveDirectory { name, path })
    }

    fn read_file(&self, dir: &DriveDirectory, name: &str) -> Result<Option<String>, DriveError> {
        match std::fs::read_to_string(dir.path.join(name)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write_file(
        &mut self,
        dir: &DriveDirectory,
        name: &str,
        contents: &str,
    ) -> Result<(), DriveError> {
        std::fs::write(dir.path.join(name), contents)?;
        Ok(())
    }
}

/// Platforms without directory access (the browser build).
#[derive(Clone, Debug, Default)]
pub struct UnsupportedDrive;

impl DriveAccess for UnsupportedDrive {
    fn is_supported(&self) -> bool {
        false
    }

    fn request_directory(&mut self) -> Result<DriveDirectory, DriveError> {
        Err(DriveError::Unsupported)
    }

    fn read_file(&self, _dir: &DriveDirectory, _name: &str) -> Result<Option<String>, DriveError> {
        Err(DriveError::Unsupported)
    }

    fn write_file(
        &mut self,
        _dir: &DriveDirectory,
        _name: &str,
        _contents: &str,
    ) -> Result<(), DriveError> {
        Err(DriveError::Unsupported)
    }
}

/// In-memory drive for tests and demos.
#[derive(Clone, Debug)]
pub struct MemoryDrive {
    name: String,
    files: HashMap<String, String>,
    pick_error: Option<DriveError>,
    write_error: Option<DriveError>,
}

impl MemoryDrive {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            files: HashMap::new(),
            pick_error: None,
            write_error: None,
        }
    }

    pub fn with_file(mut self, name: &str, contents: &str) -> Self {
        self.files.insert(name.to_string(), contents.to_string());
        self
    }

    /// The picker fails with `err` (e.g. cancelled or denied).
    pub fn failing_pick(mut self, err: DriveError) -> Self {
        self.pick_error = Some(err);
        self
    }

    pub fn failing_write(mut self, err: DriveError) -> Self {
        self.write_error = Some(err);
        self
    }

    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

impl DriveAccess for MemoryDrive {
    fn is_supported(&self) -> bool {
        true
    }

    fn request_directory(&mut self) -> Result<DriveDirectory, DriveError> {
        if let Some(err) = &self.pick_error {
            return Err(err.clone());
        }
        Ok(DriveDirectory {
            name: self.name.clone(),
            path: PathBuf::from(&self.name),
        })
    }

    fn read_file(&self, _dir: &DriveDirectory, name: &str) -> Result<Option<String>, DriveError> {
        Ok(self.files.get(name).cloned())
    }

    fn write_file(
        &mut self,
        _dir: &DriveDirectory,
        name: &str,
        contents: &str,
    ) -> Result<(), DriveError> {
        if let Some(err) = &self.write_error {
            return Err(err.clone());
        }
        self.files.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}
