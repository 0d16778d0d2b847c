//! Shared mocks for the check-in handler tests.

use std::any::Any;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use secrecy::SecretString;

use crate::domain::checkin::CheckIn;
use crate::domain::foundation::{
    CheckInId, DomainError, ErrorCode, EventEnvelope, GymId, Timestamp, UserId,
};
use crate::domain::gym::Gym;
use crate::domain::user::{Email, PasswordHasher, User, UserRole};
use crate::ports::{
    CheckInRepository, EventPublisher, GymRepository, Transaction, UnitOfWork, UserRepository,
};

struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, raw: &SecretString) -> String {
        use secrecy::ExposeSecret;
        format!("plain:{}", raw.expose_secret())
    }

    fn verify(&self, raw: &SecretString, hash: &str) -> bool {
        self.hash(raw) == hash
    }
}

fn stub_user(id: &str) -> User {
    User::register(
        UserId::new(id),
        "Jane Doe Member",
        "jane@example.com",
        &SecretString::from("s3cret-pass"),
        UserRole::Member,
        &PlainHasher,
        Timestamp::from_unix_secs(1_699_000_000),
    )
    .force_success()
}

pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

impl MockUserRepository {
    pub fn empty() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    pub fn with_user_id(id: &str) -> Self {
        Self {
            users: Mutex::new(vec![stub_user(id)]),
        }
    }

    pub fn with_user_ids(ids: &[&str]) -> Self {
        Self {
            users: Mutex::new(ids.iter().map(|id| stub_user(id)).collect()),
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update(&self, _user: &User) -> Result<(), DomainError> {
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

pub struct MockGymRepository {
    gyms: Mutex<Vec<Gym>>,
}

impl MockGymRepository {
    pub fn empty() -> Self {
        Self {
            gyms: Mutex::new(Vec::new()),
        }
    }

    pub fn with_gym(gym: Gym) -> Self {
        Self {
            gyms: Mutex::new(vec![gym]),
        }
    }
}

#[async_trait]
impl GymRepository for MockGymRepository {
    async fn save(&self, gym: &Gym) -> Result<(), DomainError> {
        self.gyms.lock().unwrap().push(gym.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &GymId) -> Result<Option<Gym>, DomainError> {
        Ok(self
            .gyms
            .lock()
            .unwrap()
            .iter()
            .find(|gym| gym.id() == id)
            .cloned())
    }
}

pub struct MockCheckInRepository {
    store: Mutex<Vec<CheckIn>>,
    fail_next_save: AtomicBool,
}

impl MockCheckInRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Vec::new()),
            fail_next_save: AtomicBool::new(false),
        }
    }

    pub fn with_check_in(check_in: CheckIn) -> Self {
        Self {
            store: Mutex::new(vec![check_in]),
            fail_next_save: AtomicBool::new(false),
        }
    }

    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }

    pub fn saved(&self) -> Vec<CheckIn> {
        self.store.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<CheckIn> {
        self.store
            .lock()
            .unwrap()
            .iter()
            .filter(|check_in| check_in.is_validated())
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CheckInRepository for MockCheckInRepository {
    async fn save(
        &self,
        check_in: &CheckIn,
        _tx: &mut dyn Transaction,
    ) -> Result<(), DomainError> {
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(DomainError::new(ErrorCode::DatabaseError, "boom"));
        }
        self.store.lock().unwrap().push(check_in.clone());
        Ok(())
    }

    async fn update(&self, check_in: &CheckIn) -> Result<(), DomainError> {
        let mut store = self.store.lock().unwrap();
        match store.iter_mut().find(|stored| stored.id() == check_in.id()) {
            Some(stored) => {
                *stored = check_in.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::CheckInNotFound,
                "check-in not found",
            )),
        }
    }

    async fn find_by_id(&self, id: &CheckInId) -> Result<Option<CheckIn>, DomainError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .iter()
            .find(|check_in| check_in.id() == id)
            .cloned())
    }

    async fn find_by_user_on_date(
        &self,
        user_id: &UserId,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, DomainError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .iter()
            .find(|check_in| {
                check_in.user_id() == user_id && check_in.created_at().calendar_date() == date
            })
            .cloned())
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .iter()
            .filter(|check_in| check_in.user_id() == user_id)
            .count() as u64)
    }
}

struct MockTransaction {
    commits: Arc<AtomicUsize>,
    rollbacks: Arc<AtomicUsize>,
}

#[async_trait]
impl Transaction for MockTransaction {
    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        self.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn as_any(&mut self) -> &mut dyn Any {
        self
    }
}

pub struct MockUnitOfWork {
    commits: Arc<AtomicUsize>,
    rollbacks: Arc<AtomicUsize>,
}

impl MockUnitOfWork {
    pub fn new() -> Self {
        Self {
            commits: Arc::new(AtomicUsize::new(0)),
            rollbacks: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn rollbacks(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UnitOfWork for MockUnitOfWork {
    async fn begin(&self) -> Result<Box<dyn Transaction>, DomainError> {
        Ok(Box::new(MockTransaction {
            commits: self.commits.clone(),
            rollbacks: self.rollbacks.clone(),
        }))
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
