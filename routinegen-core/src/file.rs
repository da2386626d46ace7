use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any previous content
    fn write(&self, base: &Path) -> Result<WrittenFile> {
        let path = self.path(base);
        let content = self.render();
        write_file(&path, &content)?;
        Ok(WrittenFile {
            path,
            bytes: content.len(),
        })
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// A file that has been written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Full path of the written file
    pub path: PathBuf,
    /// Number of bytes written
    pub bytes: usize,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("out").join("Greeting.txt")
        }

        fn render(&self) -> String {
            "hello\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_reports_path_on_failure() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_file(&blocker.join("test.txt"), "x").unwrap_err();

        assert!(format!("{:?}", err).contains("blocker"));
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let written = Greeting.write(temp.path()).unwrap();

        assert_eq!(written.path, temp.path().join("out").join("Greeting.txt"));
        assert_eq!(fs::read_to_string(&written.path).unwrap(), "hello\n");
    }
}
