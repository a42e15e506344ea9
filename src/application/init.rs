//! Initialize shelter use case

use crate::error::Result;
use crate::infrastructure::{Config, ShelterDirectory};
use std::fs;
use std::path::Path;

/// Initialize a new shelter at the specified path.
///
/// The collection itself is not written here; the first command that opens
/// the store saves the seed records under the configured key.
pub fn init(path: &Path) -> Result<ShelterDirectory> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let shelter = ShelterDirectory::new(path.to_path_buf());
    shelter.initialize()?;
    shelter.save_config(&Config::default())?;

    log::info!(
        "event=shelter_init module=app status=ok root={}",
        path.display()
    );

    Ok(shelter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("new-shelter");

        let shelter = init(&target).unwrap();

        assert!(shelter.is_initialized());
        assert!(target.join(".catshelter/config.toml").is_file());
        assert!(!target.join(".catshelter/storage/ferrellCatManagerData.json").exists());
    }
}
