//! Shared mocks for the user handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{DomainError, EventEnvelope, Timestamp, UserId};
use crate::domain::user::{Email, User, UserRole, UserStatus};
use crate::ports::{EventPublisher, PasswordHasher, UserRepository};

/// Hasher that keeps the raw password readable in the "hash".
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, raw: &SecretString) -> String {
        format!("plain:{}", raw.expose_secret())
    }

    fn verify(&self, raw: &SecretString, hash: &str) -> bool {
        self.hash(raw) == hash
    }
}

/// Builds a persisted-looking user in the given status.
pub fn stored_user(status: UserStatus) -> User {
    let mut user = User::register(
        UserId::generate(),
        "Jane Doe Member",
        "jane@example.com",
        &SecretString::from("s3cret-pass"),
        UserRole::Member,
        &PlainHasher,
        Timestamp::from_unix_secs(1_699_000_000),
    )
    .force_success();
    if status == UserStatus::Suspended {
        user.suspend(Timestamp::from_unix_secs(1_699_100_000));
    }
    user
}

pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
    updated: Mutex<Vec<User>>,
}

impl MockUserRepository {
    pub fn empty() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            updated: Mutex::new(Vec::new()),
        }
    }

    pub fn with_user(user: User) -> Self {
        Self {
            users: Mutex::new(vec![user]),
            updated: Mutex::new(Vec::new()),
        }
    }

    pub fn saved(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<User> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        self.updated.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id() == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.email() == email)
            .cloned())
    }
}

pub struct MockEventPublisher {
    published: Mutex<Vec<EventEnvelope>>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn published(&self) -> Vec<EventEnvelope> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
