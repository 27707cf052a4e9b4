//! Commands accepted by the registration handlers.

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegisterProfileCommand {
    pub age: i64,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone)]
pub struct RegisterPostCommand {
    pub title: String,
    pub content: String,
}
