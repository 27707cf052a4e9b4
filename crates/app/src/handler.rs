//! Registration use cases: user, profile, post.

use postboard_domain::{
    PasswordHasher, Post, Profile, TokenIssuer, User, UserId, UserRepository,
};

use crate::commands::{RegisterPostCommand, RegisterProfileCommand, RegisterUserCommand};
use crate::error::AppError;
use crate::publisher::{EventPublisher, TracingEventPublisher};
use crate::results::{PostResult, ProfileResult, RegistrationResult};

/// Orchestrates the three registration use cases over the injected
/// collaborators. One validation pass and one persistence round-trip per
/// call; any failure propagates unchanged.
pub struct RegistrationHandler<R, H, T, P = TracingEventPublisher> {
    repository: R,
    hasher: H,
    tokens: T,
    publisher: P,
}

impl<R, H, T> RegistrationHandler<R, H, T> {
    pub fn new(repository: R, hasher: H, tokens: T) -> Self {
        Self {
            repository,
            hasher,
            tokens,
            publisher: TracingEventPublisher,
        }
    }
}

impl<R, H, T, P> RegistrationHandler<R, H, T, P>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenIssuer,
    P: EventPublisher,
{
    pub fn with_publisher(repository: R, hasher: H, tokens: T, publisher: P) -> Self {
        Self {
            repository,
            hasher,
            tokens,
            publisher,
        }
    }

    /// Register a new account and issue its first access token.
    pub async fn register_user(
        &self,
        cmd: RegisterUserCommand,
    ) -> Result<RegistrationResult, AppError> {
        let mut user = User::register(&cmd.username, &cmd.password, &self.hasher)?;
        self.repository.add_user(&user).await?;
        self.publish_events(user.pull_events());

        let access_token = self.tokens.issue(&user.user_id())?;

        Ok(RegistrationResult {
            status: "success".to_string(),
            message: "The account has been successfully registered!".to_string(),
            access_token,
        })
    }

    /// Attach profile data to the authenticated user.
    pub async fn register_profile(
        &self,
        cmd: RegisterProfileCommand,
        user_id: UserId,
    ) -> Result<ProfileResult, AppError> {
        let mut profile = Profile::create(user_id, cmd.age, &cmd.name, &cmd.city)?;
        self.repository.add_profile(&profile).await?;
        self.publish_events(profile.pull_events());

        Ok(ProfileResult {
            status: "success".to_string(),
            message: "Your profile has been successfully added!".to_string(),
        })
    }

    /// Create a draft post owned by the authenticated user.
    pub async fn register_post(
        &self,
        cmd: RegisterPostCommand,
        user_id: UserId,
    ) -> Result<PostResult, AppError> {
        let mut post = Post::create(&cmd.title, &cmd.content, user_id)?;
        self.repository.add_post(&post).await?;
        self.publish_events(post.pull_events());

        Ok(PostResult {
            status: "success".to_string(),
            message: "Your post has been successfully added!".to_string(),
        })
    }

    fn publish_events(&self, events: Vec<postboard_domain::DomainEvent>) {
        for event in &events {
            self.publisher.publish(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use postboard_domain::{
        DomainError, DomainEvent, RepositoryError, TokenError,
    };
    use std::sync::{Arc, Mutex};

    struct IdentityHasher;

    impl PasswordHasher for IdentityHasher {
        fn hash(&self, plain: &str) -> Result<String, DomainError> {
            Ok(format!("hashed:{plain}"))
        }

        fn verify(&self, hash: &str, plain: &str) -> bool {
            hash == format!("hashed:{plain}")
        }
    }

    struct StaticTokenIssuer;

    impl TokenIssuer for StaticTokenIssuer {
        fn issue(&self, user_id: &UserId) -> Result<String, TokenError> {
            Ok(format!("token-for-{user_id}"))
        }
    }

    #[derive(Default, Clone)]
    struct InMemoryRepository {
        users: Arc<Mutex<Vec<String>>>,
        profiles: Arc<Mutex<Vec<String>>>,
        posts: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl UserRepository for InMemoryRepository {
        async fn add_user(&self, user: &User) -> Result<(), RepositoryError> {
            self.users
                .lock()
                .unwrap()
                .push(user.username().as_str().to_string());
            Ok(())
        }

        async fn add_profile(&self, profile: &Profile) -> Result<(), RepositoryError> {
            self.profiles
                .lock()
                .unwrap()
                .push(profile.user_id().to_string());
            Ok(())
        }

        async fn add_post(&self, post: &Post) -> Result<(), RepositoryError> {
            self.posts.lock().unwrap().push(post.post_id().to_string());
            Ok(())
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl UserRepository for FailingRepository {
        async fn add_user(&self, _user: &User) -> Result<(), RepositoryError> {
            Err(RepositoryError::Database("disk full".to_string()))
        }

        async fn add_profile(&self, _profile: &Profile) -> Result<(), RepositoryError> {
            Err(RepositoryError::Database("disk full".to_string()))
        }

        async fn add_post(&self, _post: &Post) -> Result<(), RepositoryError> {
            Err(RepositoryError::Database("disk full".to_string()))
        }
    }

    #[derive(Default, Clone)]
    struct RecordingPublisher {
        events: Arc<Mutex<Vec<serde_json::Value>>>,
    }

    impl EventPublisher for RecordingPublisher {
        fn publish(&self, event: &DomainEvent) {
            self.events.lock().unwrap().push(event.to_json());
        }
    }

    #[tokio::test]
    async fn register_user_persists_publishes_and_issues_token() {
        let repo = InMemoryRepository::default();
        let publisher = RecordingPublisher::default();
        let handler = RegistrationHandler::with_publisher(
            repo.clone(),
            IdentityHasher,
            StaticTokenIssuer,
            publisher.clone(),
        );

        let result = handler
            .register_user(RegisterUserCommand {
                username: "validusername".to_string(),
                password: "validpass".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.status, "success");
        assert!(result.access_token.starts_with("token-for-"));
        assert_eq!(repo.users.lock().unwrap().as_slice(), ["validusername"]);

        let events = publisher.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event_type"], "UserRegistered");
        assert_eq!(events[0]["data"]["username"], "validusername");
    }

    #[tokio::test]
    async fn register_user_propagates_validation_errors() {
        let handler =
            RegistrationHandler::new(InMemoryRepository::default(), IdentityHasher, StaticTokenIssuer);

        let err = handler
            .register_user(RegisterUserCommand {
                username: "short".to_string(),
                password: "validpass".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn register_user_propagates_persistence_failures() {
        let handler = RegistrationHandler::new(FailingRepository, IdentityHasher, StaticTokenIssuer);

        let err = handler
            .register_user(RegisterUserCommand {
                username: "validusername".to_string(),
                password: "validpass".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Repository(_)));
    }

    #[tokio::test]
    async fn register_profile_validates_and_publishes() {
        let publisher = RecordingPublisher::default();
        let handler = RegistrationHandler::with_publisher(
            InMemoryRepository::default(),
            IdentityHasher,
            StaticTokenIssuer,
            publisher.clone(),
        );
        let user_id = UserId::generate();

        let result = handler
            .register_profile(
                RegisterProfileCommand {
                    age: 30,
                    name: "bob".to_string(),
                    city: "london".to_string(),
                },
                user_id,
            )
            .await
            .unwrap();

        assert_eq!(result.status, "success");
        let events = publisher.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event_type"], "ProfileRegistered");

        let err = handler
            .register_profile(
                RegisterProfileCommand {
                    age: 150,
                    name: "bob".to_string(),
                    city: "london".to_string(),
                },
                user_id,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn register_post_creates_a_draft() {
        let repo = InMemoryRepository::default();
        let handler =
            RegistrationHandler::new(repo.clone(), IdentityHasher, StaticTokenIssuer);

        let result = handler
            .register_post(
                RegisterPostCommand {
                    title: "first post".to_string(),
                    content: "hello world".to_string(),
                },
                UserId::generate(),
            )
            .await
            .unwrap();

        assert_eq!(result.status, "success");
        assert_eq!(repo.posts.lock().unwrap().len(), 1);
    }
}
