//! Sign-up and log-in against the persisted user map.
//!
//! Users live in one JSON object under [`USERS_KEY`]. Passwords are never
//! stored: each record keeps a random salt and `SHA-256(salt || password)`,
//! both base64-encoded.

use std::collections::BTreeMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hanja_engine::{StorageError, StorageProvider};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Storage key of the user map.
pub const USERS_KEY: &str = "hanja.users";

const SALT_LEN: usize = 16;

/// A form field, for [`AuthError::MissingField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Password,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Id => f.write_str("아이디"),
            Field::Password => f.write_str("비밀번호"),
        }
    }
}

/// Display text is what the auth panel shows.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}를 입력해 주세요.")]
    MissingField(Field),
    #[error("이미 있는 아이디예요: {0}")]
    DuplicateUser(String),
    #[error("아이디 또는 비밀번호가 맞지 않아요.")]
    InvalidCredentials,
    #[error("저장소 오류: {0}")]
    Storage(#[from] StorageError),
}

/// One stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub salt: String,
    pub password_hash: String,
    #[serde(default = "first_level")]
    pub level: u32,
}

fn first_level() -> u32 {
    1
}

/// The signed-in player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub level: u32,
}

/// Load/save of the whole user map through a [`StorageProvider`].
pub struct UserStore<S> {
    storage: S,
}

impl<S: StorageProvider> UserStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The stored map, or an empty one if nothing was saved yet.
    pub fn load(&self) -> Result<BTreeMap<String, UserRecord>, StorageError> {
        match self.storage.load(USERS_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|err| {
                log::warn!("user map under '{USERS_KEY}' is unreadable: {err}");
                StorageError::Decode(err)
            }),
            None => Ok(BTreeMap::new()),
        }
    }

    pub fn save(&mut self, users: &BTreeMap<String, UserRecord>) -> Result<(), StorageError> {
        let json = serde_json::to_string(users).map_err(StorageError::Encode)?;
        self.storage.save(USERS_KEY, &json)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Sign-up and log-in.
pub struct AuthGate<S> {
    store: UserStore<S>,
}

impl<S: StorageProvider> AuthGate<S> {
    pub fn new(storage: S) -> Self {
        Self { store: UserStore::new(storage) }
    }

    /// Create a level-1 user.
    pub fn signup(&mut self, id: &str, password: &str) -> Result<User, AuthError> {
        let id = check_fields(id, password)?;

        let mut users = self.store.load()?;
        if users.contains_key(id) {
            log::info!("signup rejected: '{id}' already exists");
            return Err(AuthError::DuplicateUser(id.to_string()));
        }

        let salt = new_salt();
        let record = UserRecord {
            salt: STANDARD.encode(salt),
            password_hash: hash_password(&salt, password),
            level: first_level(),
        };
        let user = User { id: id.to_string(), level: record.level };
        users.insert(id.to_string(), record);
        self.store.save(&users)?;

        log::info!("signup: '{id}' created");
        Ok(user)
    }

    /// Check credentials and return the stored user.
    pub fn login(&self, id: &str, password: &str) -> Result<User, AuthError> {
        let id = check_fields(id, password)?;

        let users = self.store.load()?;
        let Some(record) = users.get(id) else {
            log::info!("login rejected for '{id}'");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify(record, password) {
            log::info!("login rejected for '{id}'");
            return Err(AuthError::InvalidCredentials);
        }

        log::info!("login: '{id}' at level {}", record.level);
        Ok(User { id: id.to_string(), level: record.level })
    }

    pub fn store(&self) -> &UserStore<S> {
        &self.store
    }
}

/// Trimmed id, or the first blank field.
fn check_fields<'a>(id: &'a str, password: &str) -> Result<&'a str, AuthError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AuthError::MissingField(Field::Id));
    }
    if password.trim().is_empty() {
        return Err(AuthError::MissingField(Field::Password));
    }
    Ok(id)
}

fn new_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    salt
}

fn hash_password(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    STANDARD.encode(hasher.finalize())
}

fn verify(record: &UserRecord, password: &str) -> bool {
    match STANDARD.decode(&record.salt) {
        Ok(salt) => hash_password(&salt, password) == record.password_hash,
        Err(err) => {
            log::warn!("stored salt is not base64: {err}");
            false
        }
    }
}
