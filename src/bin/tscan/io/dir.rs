use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Regular, non-hidden files of `dir`, sorted by name.
pub fn list_structure_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read PDB directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to list PDB directory: {}", dir.display()))?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_visible_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["pdb2xyz.ent", ".hidden", "pdb1abc.ent", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let names: Vec<String> = list_structure_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["notes.txt", "pdb1abc.ent", "pdb2xyz.ent"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_structure_files(&dir.path().join("absent")).is_err());
    }
}
