//! Shelter directory discovery and layout

use crate::error::{Result, ShelterError};
use crate::infrastructure::config::SHELTER_DIR;
use crate::infrastructure::{Config, FileSystemStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory containing `.catshelter/`
#[derive(Debug, Clone)]
pub struct ShelterDirectory {
    pub root: PathBuf,
}

impl ShelterDirectory {
    /// Create a handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        ShelterDirectory { root }
    }

    /// Find the shelter root.
    /// First checks CATSHELTER_ROOT environment variable, then walks up from
    /// the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("CATSHELTER_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_shelter_dir(&path) {
                return Ok(ShelterDirectory::new(path));
            } else {
                return Err(ShelterError::Config(format!(
                    "CATSHELTER_ROOT is set to '{}' but no .catshelter directory found. \
                    Run 'catshelter init' in that directory or unset CATSHELTER_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.catshelter/` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_shelter_dir(&current) {
                return Ok(ShelterDirectory::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ShelterError::NotShelterDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_shelter_dir(path: &Path) -> bool {
        path.join(SHELTER_DIR).is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_shelter_dir(&self.root)
    }

    /// Create the `.catshelter/` layout. Fails if it already exists.
    pub fn initialize(&self) -> Result<()> {
        let shelter_dir = self.root.join(SHELTER_DIR);

        if shelter_dir.exists() {
            return Err(ShelterError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&shelter_dir)?;
        fs::create_dir(self.storage_dir())?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.root.join(SHELTER_DIR).join("storage")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root.join(SHELTER_DIR).join("logs")
    }

    /// Key-value storage backed by `.catshelter/storage/`
    pub fn storage(&self) -> FileSystemStorage {
        FileSystemStorage::new(self.storage_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_layout() {
        let temp = TempDir::new().unwrap();
        let shelter = ShelterDirectory::new(temp.path().to_path_buf());

        assert!(!shelter.is_initialized());
        shelter.initialize().unwrap();

        assert!(shelter.is_initialized());
        assert!(temp.path().join(".catshelter/storage").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let shelter = ShelterDirectory::new(temp.path().to_path_buf());

        shelter.initialize().unwrap();
        assert!(matches!(shelter.initialize(), Err(ShelterError::Config(_))));
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        ShelterDirectory::new(temp.path().to_path_buf())
            .initialize()
            .unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = ShelterDirectory::discover_from(&nested).unwrap();
        assert_eq!(found.root(), temp.path());
    }

    #[test]
    fn test_discover_from_without_shelter_fails() {
        let temp = TempDir::new().unwrap();
        let result = ShelterDirectory::discover_from(temp.path());
        assert!(matches!(result, Err(ShelterError::NotShelterDirectory(_))));
    }

    #[test]
    fn test_storage_points_into_shelter() {
        let shelter = ShelterDirectory::new(PathBuf::from("/srv/shelter"));
        assert_eq!(
            shelter.storage().dir(),
            Path::new("/srv/shelter/.catshelter/storage")
        );
        assert_eq!(
            shelter.log_dir(),
            PathBuf::from("/srv/shelter/.catshelter/logs")
        );
    }
}
