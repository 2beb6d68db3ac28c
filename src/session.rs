//! Stored sign-in session: a bearer token and the account role, kept in a
//! small file under the platform data dir. The views never read the token;
//! the role only selects which sidebar variant renders.

use std::path::PathBuf;

use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Agrovet,
}

impl Role {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "agrovet" => Some(Role::Agrovet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

pub fn default_session_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fruitguard")
        .join("session")
}

/// Reads the session file: the token on the first line, the role on the
/// second. A missing file means no one is signed in.
pub async fn load_session(path: PathBuf) -> Result<Option<Session>, String> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)
        .await
        .map_err(|err| format!("Failed to read session: {err}"))?;

    Ok(parse_session(&contents))
}

/// Removes the stored session. Called when the user confirms the logout;
/// an already-missing file is not an error.
pub async fn clear_session(path: PathBuf) -> Result<(), String> {
    match fs::remove_file(&path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(format!("Failed to clear session: {err}")),
    }
}

fn parse_session(contents: &str) -> Option<Session> {
    let mut lines = contents.lines();
    let token = lines.next()?.trim();

    if token.is_empty() {
        return None;
    }

    let role = Role::parse(lines.next()?.trim())?;

    Some(Session {
        token: token.to_owned(),
        role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_token_and_role() {
        let session = parse_session("fake-jwt-token\nagrovet\n").unwrap();
        assert_eq!(session.token, "fake-jwt-token");
        assert_eq!(session.role, Role::Agrovet);
    }

    #[test]
    fn test_parse_session_rejects_unknown_role() {
        assert!(parse_session("fake-jwt-token\nfarmer\n").is_none());
        assert!(parse_session("\nadmin\n").is_none());
        assert!(parse_session("").is_none());
    }

    #[tokio::test]
    async fn test_session_load_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");

        fs::write(&path, "fake-jwt-token\nadmin\n").await.unwrap();

        let loaded = load_session(path.clone()).await.unwrap().unwrap();
        assert_eq!(loaded.token, "fake-jwt-token");
        assert_eq!(loaded.role, Role::Admin);

        clear_session(path.clone()).await.unwrap();
        assert!(load_session(path.clone()).await.unwrap().is_none());

        // Clearing twice is fine.
        clear_session(path).await.unwrap();
    }
}
