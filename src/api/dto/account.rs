//! DTOs for account endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::Registration;
use crate::domain::entities::Role;

/// Credentials submitted to `POST /api/accounts/login`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserDto {
    #[validate(email(message = "Email address is invalid"))]
    pub email: String,

    #[validate(length(min = 6, max = 15, message = "Your password is limited to 6 to 15 characters"))]
    pub password: String,
}

/// Body of `POST /api/accounts/register`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[validate(email(message = "Email address is invalid"))]
    pub email: String,

    #[validate(length(min = 6, max = 15, message = "Your password is limited to 6 to 15 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(length(min = 5, max = 20, message = "Phone number is invalid"))]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub roles: Vec<Role>,
}

impl From<UserDto> for Registration {
    fn from(dto: UserDto) -> Self {
        Registration {
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone_number: dto.phone_number,
            roles: dto.roles,
        }
    }
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
