//! Aggregates: invariant-enforcing constructors with event capture.
//!
//! Identity fields are private and immutable after construction; the pending
//! event queue is the only mutable slot, drained exactly once through
//! `pull_events`.

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::events::DomainEvent;
use crate::hasher::PasswordHasher;
use crate::values::{
    Age, City, Content, PasswordHash, PostId, PostStatus, ProfileName, Title, UserId, Username,
};

/// A registered account.
#[derive(Debug, Clone)]
pub struct User {
    username: Username,
    user_id: UserId,
    password: PasswordHash,
    created_at: DateTime<Utc>,
    events: Vec<DomainEvent>,
}

impl User {
    /// Validate the raw credentials, hash the password, and mint a new user
    /// carrying exactly one `UserRegistered` event.
    pub fn register(
        raw_username: &str,
        plain_password: &str,
        hasher: &impl PasswordHasher,
    ) -> Result<Self, DomainError> {
        let username = Username::new(raw_username)?;
        let password = PasswordHash::from_plain(plain_password, hasher)?;
        let user_id = UserId::generate();

        Ok(Self {
            events: vec![DomainEvent::user_registered(user_id, &username)],
            username,
            user_id,
            password,
            created_at: Utc::now(),
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Drain the pending events. A second call returns an empty list.
    pub fn pull_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Profile data attached one-to-one to a user.
#[derive(Debug, Clone)]
pub struct Profile {
    user_id: UserId,
    age: Age,
    name: ProfileName,
    city: City,
    events: Vec<DomainEvent>,
}

impl Profile {
    /// Validate the profile fields and attach them to the given user,
    /// queueing one `ProfileRegistered` event.
    pub fn create(user_id: UserId, age: i64, name: &str, city: &str) -> Result<Self, DomainError> {
        let age = Age::new(age)?;
        let name = ProfileName::new(name)?;
        let city = City::new(city)?;

        Ok(Self {
            events: vec![DomainEvent::profile_registered(user_id)],
            user_id,
            age,
            name,
            city,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn name(&self) -> &ProfileName {
        &self.name
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn pull_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}

/// A content post owned by a user. Always created as a draft.
#[derive(Debug, Clone)]
pub struct Post {
    user_id: UserId,
    post_id: PostId,
    title: Title,
    content: Content,
    status: PostStatus,
    created_at: DateTime<Utc>,
    events: Vec<DomainEvent>,
}

impl Post {
    /// Validate title and content and mint a new draft post carrying one
    /// `PostRegistered` event.
    pub fn create(title: &str, content: &str, user_id: UserId) -> Result<Self, DomainError> {
        let title = Title::new(title)?;
        let content = Content::new(content)?;
        let post_id = PostId::generate();

        Ok(Self {
            events: vec![DomainEvent::post_registered(user_id, post_id)],
            user_id,
            post_id,
            title,
            content,
            status: PostStatus::Draft,
            created_at: Utc::now(),
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn status(&self) -> PostStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn pull_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::DomainEventKind;

    struct IdentityHasher;

    impl PasswordHasher for IdentityHasher {
        fn hash(&self, plain: &str) -> Result<String, DomainError> {
            Ok(format!("hashed:{plain}"))
        }

        fn verify(&self, hash: &str, plain: &str) -> bool {
            hash == format!("hashed:{plain}")
        }
    }

    struct FailingHasher;

    impl PasswordHasher for FailingHasher {
        fn hash(&self, _plain: &str) -> Result<String, DomainError> {
            Err(DomainError::Hashing("backend unavailable".to_string()))
        }

        fn verify(&self, _hash: &str, _plain: &str) -> bool {
            false
        }
    }

    #[test]
    fn register_queues_exactly_one_event() {
        let mut user = User::register("validusername", "validpass", &IdentityHasher).unwrap();

        let events = user.pull_events();
        assert_eq!(events.len(), 1);
        match &events[0].kind {
            DomainEventKind::UserRegistered { user_id, username } => {
                assert_eq!(*user_id, user.user_id());
                assert_eq!(username, "validusername");
            }
            other => panic!("unexpected event: {other:?}"),
        }

        assert!(user.pull_events().is_empty());
    }

    #[test]
    fn register_rejects_invalid_username() {
        let err = User::register("short", "validpass", &IdentityHasher).unwrap_err();
        assert_eq!(err, DomainError::Validation("username is too short".into()));
    }

    #[test]
    fn register_rejects_invalid_password() {
        assert!(User::register("validusername", "1234", &IdentityHasher).is_err());
        assert!(User::register("validusername", "0123456789abcdef", &IdentityHasher).is_err());
    }

    #[test]
    fn register_surfaces_hasher_failure() {
        let err = User::register("validusername", "validpass", &FailingHasher).unwrap_err();
        assert!(matches!(err, DomainError::Hashing(_)));
    }

    #[test]
    fn register_never_stores_plaintext() {
        let user = User::register("validusername", "validpass", &IdentityHasher).unwrap();
        assert_ne!(user.password().as_str(), "validpass");
        assert!(user.password().verify("validpass", &IdentityHasher));
    }

    #[test]
    fn profile_create_validates_and_queues_event() {
        let user_id = UserId::generate();
        let mut profile = Profile::create(user_id, 30, "bob", "london").unwrap();

        assert_eq!(profile.user_id(), user_id);
        assert_eq!(profile.age().value(), 30);

        let events = profile.pull_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0].kind,
            DomainEventKind::ProfileRegistered { user_id: id } if *id == user_id
        ));
        assert!(profile.pull_events().is_empty());
    }

    #[test]
    fn profile_create_fails_on_any_invalid_field() {
        let user_id = UserId::generate();
        assert!(Profile::create(user_id, 150, "bob", "london").is_err());
        assert!(Profile::create(user_id, 30, "ab", "london").is_err());
        assert!(Profile::create(user_id, 30, "bob", "").is_err());
    }

    #[test]
    fn post_create_is_draft_with_one_event() {
        let user_id = UserId::generate();
        let mut post = Post::create("first post", "hello world", user_id).unwrap();

        assert_eq!(post.status(), PostStatus::Draft);
        assert_eq!(post.user_id(), user_id);

        let events = post.pull_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0].kind,
            DomainEventKind::PostRegistered { user_id: uid, post_id }
                if *uid == user_id && *post_id == post.post_id()
        ));
        assert!(post.pull_events().is_empty());
    }

    #[test]
    fn post_create_validates_title_and_content() {
        let user_id = UserId::generate();
        assert!(Post::create("ab", "hello world", user_id).is_err());
        assert!(Post::create("first post", "hi", user_id).is_err());
    }

    #[test]
    fn post_ids_are_unique() {
        let user_id = UserId::generate();
        let a = Post::create("first post", "hello world", user_id).unwrap();
        let b = Post::create("first post", "hello world", user_id).unwrap();
        assert_ne!(a.post_id(), b.post_id());
    }
}
