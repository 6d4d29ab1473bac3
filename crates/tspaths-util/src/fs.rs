use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read a file to string, replacing invalid UTF-8 sequences with the replacement character.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_to_string_lossy(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Walk up from `start` looking for the first directory that contains one of `names`.
///
/// Names are checked in order within each directory, so earlier names win
/// over later ones at the same level. Returns the full path of the match.
#[must_use]
pub fn find_up(start: &Path, names: &[&str]) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        for name in names {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_read_to_string_lossy_valid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();
        file.flush().unwrap();

        let content = read_to_string_lossy(file.path()).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_read_to_string_lossy_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        // Write invalid UTF-8: valid start, then invalid continuation
        file.write_all(&[0x48, 0x65, 0x6c, 0x6c, 0x6f, 0x80, 0x81])
            .unwrap();
        file.flush().unwrap();

        let content = read_to_string_lossy(file.path()).unwrap();
        assert!(content.starts_with("Hello"));
        assert!(content.contains('\u{FFFD}'));
    }

    #[test]
    fn test_find_up_in_start_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();

        let found = find_up(dir.path(), &["tsconfig.json"]).unwrap();
        assert_eq!(found, dir.path().join("tsconfig.json"));
    }

    #[test]
    fn test_find_up_walks_to_parent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("src").join("components");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("jsconfig.json"), "{}").unwrap();

        let found = find_up(&nested, &["tsconfig.json", "jsconfig.json"]).unwrap();
        assert_eq!(found, dir.path().join("jsconfig.json"));
    }

    #[test]
    fn test_find_up_prefers_earlier_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
        fs::write(dir.path().join("jsconfig.json"), "{}").unwrap();

        let found = find_up(dir.path(), &["tsconfig.json", "jsconfig.json"]).unwrap();
        assert_eq!(found, dir.path().join("tsconfig.json"));
    }

    #[test]
    fn test_find_up_ignores_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("tsconfig.json")).unwrap();
        let nested = dir.path().join("a");
        fs::create_dir(&nested).unwrap();

        // A directory named like the target is not a match; the walk continues
        // upward and may or may not find a real file above the temp dir.
        let found = find_up(&nested, &["tsconfig.json"]);
        assert_ne!(found, Some(dir.path().join("tsconfig.json")));
    }
}
