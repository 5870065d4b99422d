use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<crate::api::users::User> for User {
    fn from(value: crate::api::users::User) -> Self {
        // The wire form carries no id; stores assign one on insert.
        Self {
            id: Uuid::nil(),
            username: value.username,
            email: value.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;

    #[test]
    fn entity_id_starts_unset() {
        let dto = api::users::User {
            username: "john-doe".to_string(),
            email: "john@test.com".to_string(),
        };

        let user: User = dto.into();

        assert!(user.id.is_nil());
        assert_eq!(user.username, "john-doe");
        assert_eq!(user.email, "john@test.com");
    }
}
