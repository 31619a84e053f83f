//! Remote user-directory access.
//!
//! The directory is fetched exactly once per run. [`spawn_fetch`] runs the
//! request on its own thread and hands the outcome back over a channel so
//! the event loop never blocks on the network.

use std::sync::mpsc;
use std::thread;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info};

/// Endpoint queried when none is given on the command line.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// One record of the remote directory.
///
/// The payload carries more than the card view shows (street address,
/// company, geo coordinates); unknown fields are dropped on deserialization.
/// `liked` never comes over the wire and never goes back out, it exists only
/// in this process.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    /// Only used to derive the avatar URL, not editable.
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    #[serde(default)]
    pub liked: bool,
}

impl User {
    /// Avatar image URL derived from the username.
    pub fn avatar_url(&self) -> String {
        avatar_url(&self.username)
    }
}

/// Builds the avatar URL for a directory username.
pub fn avatar_url(username: &str) -> String {
    format!("https://avatars.dicebear.com/v2/avataaars/{username}.svg?options[mood][]=happy")
}

/// Why the directory fetch failed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("connection to the directory endpoint was refused")]
    ConnectionRefused,
    #[error("directory request timed out")]
    Timeout,
    #[error("directory endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },
    #[error("malformed directory payload: {0}")]
    Decode(String),
    #[error("directory request failed: {0}")]
    RequestFailed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_connect() {
            FetchError::ConnectionRefused
        } else if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            FetchError::RequestFailed(err.to_string())
        }
    }
}

/// Blocking HTTP client for the user directory.
pub struct DirectoryClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl DirectoryClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Fetches the whole directory as served, in payload order.
    pub fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        info!("fetching user directory from {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }
        let users: Vec<User> = response.json()?;
        debug!("directory returned {} users", users.len());
        Ok(users)
    }
}

/// What the background fetch delivers, at most once.
pub type FetchOutcome = Result<Vec<User>, FetchError>;

/// Runs the one-shot directory fetch on its own thread.
pub fn spawn_fetch(endpoint: String) -> mpsc::Receiver<FetchOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = DirectoryClient::new(endpoint).and_then(|client| client.fetch_users());
        if let Err(err) = &outcome {
            error!("directory fetch failed: {err}");
        }
        // receiver is gone when the user quit before the fetch finished
        let _ = tx.send(outcome);
    });
    rx
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_a_directory_payload_ignoring_extras() {
		let payload = r#"[
			{
				"id": 1,
				"name": "Leanne Graham",
				"username": "Bret",
				"email": "Sincere@april.biz",
				"address": {
					"street": "Kulas Light",
					"city": "Gwenborough",
					"geo": { "lat": "-37.3159", "lng": "81.1496" }
				},
				"phone": "1-770-736-8031 x56442",
				"website": "hildegard.org",
				"company": { "name": "Romaguera-Crona" }
			}
		]"#;
		let users: Vec<User> = serde_json::from_str(payload).unwrap();
		assert_eq!(users.len(), 1);
		assert_eq!(users[0].id, 1);
		assert_eq!(users[0].name, "Leanne Graham");
		assert_eq!(users[0].username, "Bret");
		assert_eq!(users[0].email, "Sincere@april.biz");
		assert_eq!(users[0].phone, "1-770-736-8031 x56442");
		assert_eq!(users[0].website, "hildegard.org");
		assert!(!users[0].liked);
	}

	#[test]
	fn avatar_url_interpolates_the_username() {
		let user = User {
			id: 2,
			name: "Ervin Howell".to_string(),
			username: "Antonette".to_string(),
			email: "Shanna@melissa.tv".to_string(),
			phone: "010-692-6593 x09125".to_string(),
			website: "anastasia.net".to_string(),
			liked: false,
		};
		assert_eq!(
			user.avatar_url(),
			"https://avatars.dicebear.com/v2/avataaars/Antonette.svg?options[mood][]=happy"
		);
	}

	#[test]
	fn missing_required_field_is_a_decode_error() {
		let payload = r#"[{ "id": 1, "name": "No Contact", "username": "nc" }]"#;
		let parsed: std::result::Result<Vec<User>, _> = serde_json::from_str(payload);
		assert!(parsed.is_err());
	}
}
