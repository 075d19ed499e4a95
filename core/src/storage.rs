use crate::batch::Package;
use crate::error::StorageError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Leser inn en batch (JSON-liste med pakker) fra disk.
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>, StorageError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let file = File::open(path).map_err(|source| StorageError::Io {
        path: shown.clone(),
        source,
    })?;

    let de = &mut serde_json::Deserializer::from_reader(BufReader::new(file));
    let packages: Vec<Package> = serde_path_to_error::deserialize(de).map_err(|e| {
        StorageError::Parse {
            path: shown.clone(),
            at: e.path().to_string(),
            source: e.into_inner(),
        }
    })?;

    log::info!("📂 Batch lastet fra {} ({} pakker)", shown, packages.len());
    Ok(packages)
}

/// Lagrer en batch til disk som JSON (pretty-print).
pub fn save_packages(packages: &[Package], path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let json = serde_json::to_string_pretty(packages).map_err(|source| StorageError::Parse {
        path: shown.clone(),
        at: ".".to_string(),
        source,
    })?;
    std::fs::write(path, json).map_err(|source| StorageError::Io {
        path: shown.clone(),
        source,
    })?;

    log::info!("✅ Batch lagret til {} ({} pakker)", shown, packages.len());
    Ok(())
}
