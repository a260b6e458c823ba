use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

pub const ENV_DATA_DIR: &str = "RUIZ_DATA_DIR";
const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "ruiz";
const APPLICATION: &str = "ruiz";

/// Resolve the base directory for all persisted data, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let path = determine_data_dir()?;
    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Saved task lines, one ` | `-separated record per line.
pub fn tasks_file_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join("tasks.txt"))
}

/// Append-only JSONL history of parsed lines.
pub fn history_log_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join("history.jsonl"))
}

/// Tracing output.
pub fn log_file_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join("ruiz.log"))
}

fn determine_data_dir() -> io::Result<PathBuf> {
    // Priority 1: explicit override; an empty `RUIZ_DATA_DIR=` counts as unset
    if let Some(env_dir) = env::var_os(ENV_DATA_DIR).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(env_dir));
    }

    // Priority 2: OS-standard application data directory
    if let Some(project_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        return Ok(project_dirs.data_local_dir().to_path_buf());
    }

    // Only reachable without a home directory
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("Could not determine data directory. Please set {ENV_DATA_DIR} environment variable."),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(data_dir_env)]
    fn test_env_override_wins() {
        let dir = env::temp_dir().join("ruiz_paths_env_override");
        let _ = fs::remove_dir_all(&dir);
        env::set_var(ENV_DATA_DIR, &dir);

        let resolved = data_dir().unwrap();
        assert_eq!(resolved, dir);
        assert!(dir.is_dir(), "data dir should be created on demand");
        assert_eq!(history_log_path().unwrap(), dir.join("history.jsonl"));
        assert_eq!(tasks_file_path().unwrap(), dir.join("tasks.txt"));
        assert_eq!(log_file_path().unwrap(), dir.join("ruiz.log"));

        env::remove_var(ENV_DATA_DIR);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    #[serial(data_dir_env)]
    fn test_empty_env_override_is_ignored() {
        env::set_var(ENV_DATA_DIR, "");
        let resolved = determine_data_dir();
        env::remove_var(ENV_DATA_DIR);

        match ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
            Some(project_dirs) => assert_eq!(resolved.unwrap(), project_dirs.data_local_dir()),
            None => assert!(resolved.is_err()),
        }
    }
}
