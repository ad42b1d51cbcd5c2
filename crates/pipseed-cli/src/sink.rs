use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Prints `data` followed by a newline on stdout.
pub fn write_stdout(data: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{data}")?;
    stdout.flush()
}

/// Writes `data` to `path` through a sibling temp file that is synced and then
/// renamed over the target. The temp file is removed if any step fails.
pub fn write_file_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let tmp_path = temp_path(path)?;
    let result = write_and_rename(&tmp_path, path, data);
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result
}

fn write_and_rename(tmp_path: &Path, path: &Path, data: &[u8]) -> io::Result<()> {
    {
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(tmp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
    }
    std::fs::rename(tmp_path, path)
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid output path: {}", path.display()),
        )
    })?;
    let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("pipseed_sink_{label}_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn writes_and_replaces_file() {
        let dir = temp_dir("write");
        let path = dir.join("out.json");
        std::fs::write(&path, "old").expect("seed file");

        write_file_atomic(&path, "[{\"name\":\"Zoë\"}]".as_bytes()).expect("write output");

        let content = std::fs::read_to_string(&path).expect("read output");
        assert_eq!(content, "[{\"name\":\"Zoë\"}]");
        assert!(!dir.join(".out.json.tmp").exists());
    }

    #[test]
    fn missing_directory_fails_without_leftovers() {
        let dir = temp_dir("missing");
        let path = dir.join("nope").join("out.csv");

        let result = write_file_atomic(&path, b"a,b\n");
        assert!(result.is_err());
        assert!(!path.exists());
        assert!(!dir.join("nope").exists());
    }

    #[test]
    fn rejects_path_without_file_name() {
        let result = write_file_atomic(Path::new("/"), b"data");
        assert_eq!(
            result.map_err(|err| err.kind()),
            Err(io::ErrorKind::InvalidInput)
        );
    }
}
