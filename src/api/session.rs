use std::fs::File;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Tokens persisted between invocations, stored under the user cache dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Session {
    pub(crate) username: String,
    pub(crate) roles: Vec<String>,
    pub(crate) access_token: String,
    pub(crate) refresh_token: String,
    pub(crate) expires: String,
}

impl Session {
    pub(crate) fn path() -> Option<PathBuf> {
        // ADMINCTL_SESSION_FILE overrides the default location
        if let Some(path) = std::env::var_os("ADMINCTL_SESSION_FILE") {
            return Some(PathBuf::from(path));
        }
        let home = dirs::home_dir()?;
        Some(home.join(".cache").join("adminctl").join("session.json"))
    }

    pub(crate) fn load() -> Option<Self> {
        let path = Self::path()?;
        let file = File::open(&path).ok()?;
        serde_json::from_reader(file).ok()
    }

    pub(crate) fn save(&self) {
        let Some(path) = Self::path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match File::create(&path) {
            Ok(mut file) => {
                if let Err(e) = serde_json::to_writer_pretty(&mut file, self) {
                    eprintln!("Warning: failed to write session file: {e}");
                }
            }
            Err(e) => eprintln!("Warning: failed to create session file: {e}"),
        }
    }

    /// Remove the stored session. Returns whether one existed.
    pub(crate) fn clear() -> bool {
        match Self::path() {
            Some(path) => std::fs::remove_file(path).is_ok(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            username: "admin".to_string(),
            roles: vec!["admin".to_string()],
            access_token: "aaa".to_string(),
            refresh_token: "rrr".to_string(),
            expires: "2024/03/05 10:07:03".to_string(),
        }
    }

    #[test]
    fn session_roundtrips_through_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back.username, "admin");
        assert_eq!(back.access_token, "aaa");
        assert_eq!(back.roles, vec!["admin"]);
    }

    #[test]
    fn session_rejects_incomplete_json() {
        assert!(serde_json::from_str::<Session>(r#"{"username":"x"}"#).is_err());
    }
}
