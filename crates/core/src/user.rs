use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::id::UserId;
use crate::validation::{FieldChecker, Validate, ValidationErrors};

/// Complete set of user columns except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub city: String,
    pub language: String,
}

/// A stored user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(flatten)]
    pub fields: NewUser,
}

/// Write payload for `POST /api/users` and `PUT /api/users/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub language: Option<String>,
}

impl Validate for UserInput {
    type Output = NewUser;

    fn validate(self) -> Result<NewUser, ValidationErrors> {
        let mut checker = FieldChecker::new();
        let user = NewUser {
            firstname: checker.text("firstname", self.firstname),
            lastname: checker.text("lastname", self.lastname),
            email: checker.text("email", self.email),
            city: checker.text("city", self.city),
            language: checker.text("language", self.language),
        };
        checker.finish(user)
    }
}

/// Query filters for `GET /api/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserFilter {
    pub language: Option<String>,
    pub city: Option<String>,
}

impl Entity for User {
    type Id = UserId;
    type Fields = NewUser;
    type Filter = UserFilter;

    const KIND: &'static str = "user";
    const COLLECTION: &'static str = "users";

    fn from_parts(id: UserId, fields: NewUser) -> Self {
        Self { id, fields }
    }

    fn id(&self) -> &UserId {
        &self.id
    }

    fn fields(&self) -> &NewUser {
        &self.fields
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        filter.language.as_deref().is_none_or(|l| self.fields.language == l)
            && filter.city.as_deref().is_none_or(|c| self.fields.city == c)
    }
}
