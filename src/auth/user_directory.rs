//! The set of users allowed to log in, loaded once at start up.

use std::{collections::HashMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, password::PasswordHash};

/// A user that can authenticate with HTTP Basic credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// The username, which doubles as the owner of the user's cash cards.
    pub username: String,
    /// The bcrypt hash of the user's password.
    pub password_hash: PasswordHash,
    /// The roles granted to the user, e.g. [CARD_OWNER_ROLE](crate::CARD_OWNER_ROLE).
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserAccount {
    /// Whether the user was granted `role`.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|granted| granted == role)
    }
}

/// Looks up users by username and checks their passwords.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, UserAccount>,
}

impl UserDirectory {
    /// Create a directory from a list of users.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidUserDirectory] if two users share a username.
    pub fn new(users: impl IntoIterator<Item = UserAccount>) -> Result<Self, Error> {
        let mut by_username = HashMap::new();

        for user in users {
            if by_username.contains_key(&user.username) {
                return Err(Error::InvalidUserDirectory(format!(
                    "the username \"{}\" is used more than once",
                    user.username
                )));
            }

            by_username.insert(user.username.clone(), user);
        }

        Ok(Self { users: by_username })
    }

    /// Parse a JSON array of [UserAccount]s.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidUserDirectory] if the text is not a valid list of
    /// users or if a username is repeated.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let users: Vec<UserAccount> = serde_json::from_str(text)
            .map_err(|error| Error::InvalidUserDirectory(error.to_string()))?;

        Self::new(users)
    }

    /// Read the user directory from the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidUserDirectory] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|error| {
            Error::InvalidUserDirectory(format!("could not read {}: {error}", path.display()))
        })?;

        Self::from_json(&text)
    }

    /// The number of users in the directory.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Get the user called `username` if `password` is their password.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [Error::InvalidCredentials] if there is no such user or the password is wrong.
    /// - [Error::HashingError] if the stored password hash is corrupt.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&UserAccount, Error> {
        let Some(user) = self.users.get(username) else {
            tracing::debug!("Log in attempt for unknown user \"{username}\"");
            return Err(Error::InvalidCredentials);
        };

        match user.password_hash.verify(password) {
            Ok(true) => Ok(user),
            Ok(false) => {
                tracing::debug!("Wrong password for user \"{username}\"");
                Err(Error::InvalidCredentials)
            }
            Err(error) => {
                tracing::error!("Could not verify the password of \"{username}\": {error}");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        CARD_OWNER_ROLE, Error,
        auth::{UserAccount, UserDirectory},
        password::{PasswordHash, ValidatedPassword},
    };

    fn must_create_user(username: &str, password: &str, roles: &[&str]) -> UserAccount {
        UserAccount {
            username: username.to_owned(),
            password_hash: PasswordHash::new(ValidatedPassword::new_unchecked(password), 4)
                .expect("could not hash test password"),
            roles: roles.iter().map(|role| role.to_string()).collect(),
        }
    }

    #[test]
    fn authenticates_with_correct_password() {
        let directory =
            UserDirectory::new([must_create_user("jack1", "abc123", &[CARD_OWNER_ROLE])]).unwrap();

        let user = directory.authenticate("jack1", "abc123").unwrap();

        assert_eq!(user.username, "jack1");
        assert!(user.has_role(CARD_OWNER_ROLE));
    }

    #[test]
    fn rejects_wrong_password_and_unknown_user() {
        let directory =
            UserDirectory::new([must_create_user("jack1", "abc123", &[CARD_OWNER_ROLE])]).unwrap();

        assert_eq!(
            directory.authenticate("jack1", "BAD-PASSWORD"),
            Err(Error::InvalidCredentials)
        );
        assert_eq!(
            directory.authenticate("BAD-USER", "abc123"),
            Err(Error::InvalidCredentials)
        );
    }

    #[test]
    fn rejects_duplicate_usernames() {
        let result = UserDirectory::new([
            must_create_user("jack1", "abc123", &[]),
            must_create_user("jack1", "xyz789", &[]),
        ]);

        assert!(matches!(result, Err(Error::InvalidUserDirectory(_))));
    }

    #[test]
    fn parses_json_list() {
        let user = must_create_user("hank-owns-no-cards", "qrs456", &["NON-OWNER"]);
        let text = serde_json::to_string(&vec![user.clone()]).unwrap();

        let directory = UserDirectory::from_json(&text).unwrap();

        assert_eq!(directory.len(), 1);
        let got = directory.authenticate("hank-owns-no-cards", "qrs456").unwrap();
        assert_eq!(got, &user);
        assert!(!got.has_role(CARD_OWNER_ROLE));
    }

    #[test]
    fn roles_default_to_empty() {
        let text = r#"[{ "username": "kumar2", "password_hash": "$2b$04$abc" }]"#;

        let directory = UserDirectory::from_json(text).unwrap();

        assert!(!directory.is_empty());
    }

    #[test]
    fn rejects_invalid_json() {
        let result = UserDirectory::from_json("{ not json");

        assert!(matches!(result, Err(Error::InvalidUserDirectory(_))));
    }
}
