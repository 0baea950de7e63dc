//! Session persisted as a JSON file between CLI invocations.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use api::ApiError;
use api::model::User;
use api::session::{Session, SessionStore};

pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.delfos/session.json`, or the working directory when `HOME`
    /// is unset.
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_default()
            .join(".delfos")
            .join(SESSION_FILE_NAME)
    }

    fn read(&self) -> Option<Session> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("cannot read {}: {err}", self.path.display());
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("ignoring corrupt session file {}: {err}", self.path.display());
                None
            }
        }
    }
}

impl SessionStore for FileStore {
    fn token(&self) -> Option<String> {
        self.read().map(|s| s.token).filter(|t| !t.is_empty())
    }

    fn user(&self) -> Option<User> {
        self.read().and_then(|s| s.user)
    }

    fn save(&self, session: &Session) -> Result<(), ApiError> {
        let storage = |err: std::io::Error| ApiError::Storage(format!("{}: {err}", self.path.display()));
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(storage)?;
        }
        let body = serde_json::to_string_pretty(session).map_err(|e| ApiError::Storage(e.to_string()))?;
        let mut file = owner_only(OpenOptions::new().write(true).create(true).truncate(true))
            .open(&self.path)
            .map_err(storage)?;
        restrict(&file).map_err(storage)?;
        file.write_all(body.as_bytes()).map_err(storage)
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => log::warn!("cannot remove {}: {err}", self.path.display()),
        }
    }
}

/// The file holds a bearer token: readable by its owner only.
#[cfg(unix)]
const SESSION_FILE_MODE: u32 = 0o600;

#[cfg(unix)]
fn owner_only(options: &mut OpenOptions) -> &mut OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(SESSION_FILE_MODE)
}

#[cfg(not(unix))]
fn owner_only(options: &mut OpenOptions) -> &mut OpenOptions {
    options
}

/// `mode` only applies on creation; tighten a file left by an older build.
#[cfg(unix)]
fn restrict(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(SESSION_FILE_MODE))
}

#[cfg(not(unix))]
fn restrict(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
