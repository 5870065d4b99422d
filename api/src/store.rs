use models::data::users::User;
use uuid::Uuid;

/// Backing store seam, so the service logic stays independent of where the
/// user records actually live.
pub trait UserStore: Send + Sync {
    fn list(&self) -> Vec<User>;
    fn find_by_username(&self, username: &str) -> Option<User>;
    fn insert(&self, user: User) -> User;
}

/// Built-in demo data set. The records are rebuilt from literals on every
/// call: ids differ between calls and inserts never survive.
#[derive(Debug, Default)]
pub struct SeededStore;

impl SeededStore {
    fn seed(&self) -> Vec<User> {
        vec![
            User {
                id: Uuid::new_v4(),
                username: "john-doe".to_string(),
                email: "john@test.com".to_string(),
            },
            User {
                id: Uuid::new_v4(),
                username: "jane-doe".to_string(),
                email: "jane@test.com".to_string(),
            },
        ]
    }
}

impl UserStore for SeededStore {
    fn list(&self) -> Vec<User> {
        self.seed()
    }

    fn find_by_username(&self, username: &str) -> Option<User> {
        self.seed()
            .into_iter()
            .find(|user| user.username == username)
    }

    fn insert(&self, mut user: User) -> User {
        user.id = Uuid::new_v4();
        user
    }
}
