use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto, RegisterResponse,
};
use crate::modules::users::model::{UpdateLoginDto, UpdatePasswordDto, UserResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_user_by_id,
        crate::modules::users::controller::update_login,
        crate::modules::users::controller::update_password,
    ),
    components(
        schemas(
            RegisterRequestDto,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            UserResponse,
            UpdateLoginDto,
            UpdatePasswordDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Users", description = "User lookup and self-service")
    ),
    info(
        title = "CraftPlace API",
        version = "0.1.0",
        description = "Marketplace backend for handicraft makers: accounts and token-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
