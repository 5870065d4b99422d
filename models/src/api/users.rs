use serde::{Deserialize, Serialize};

/// Wire representation of a user. The internal id is never exposed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

impl From<crate::data::users::User> for User {
    fn from(value: crate::data::users::User) -> Self {
        Self {
            username: value.username,
            email: value.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use uuid::Uuid;

    #[test]
    fn drops_id_on_conversion() {
        let user = data::users::User {
            id: Uuid::new_v4(),
            username: "john-doe".to_string(),
            email: "john@test.com".to_string(),
        };

        let dto: User = user.into();

        assert_eq!(dto.username, "john-doe");
        assert_eq!(dto.email, "john@test.com");
    }

    #[test]
    fn round_trips_through_entity() {
        let dto = User {
            username: "jane-doe".to_string(),
            email: "jane@test.com".to_string(),
        };

        let entity: data::users::User = dto.clone().into();
        let back: User = entity.into();

        assert_eq!(back, dto);
    }
}
