use std::sync::Arc;

use craftplace_auth::{AuthError, JwtTokenMaker, TokenMaker};
use craftplace_config::{CorsConfig, JwtConfig};

use crate::modules::users::repository::UserRepository;

#[derive(Clone, Debug)]
pub struct AppState {
    pub token_maker: Arc<dyn TokenMaker>,
    pub users: Arc<UserRepository>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Builds the state, failing if the signing secret is unusable.
    pub fn new(jwt_config: JwtConfig, cors_config: CorsConfig) -> Result<Self, AuthError> {
        let token_maker = JwtTokenMaker::from_config(&jwt_config)?;

        Ok(Self {
            token_maker: Arc::new(token_maker),
            users: Arc::new(UserRepository::new()),
            jwt_config,
            cors_config,
        })
    }
}

pub fn init_app_state() -> Result<AppState, AuthError> {
    AppState::new(JwtConfig::from_env(), CorsConfig::from_env())
}
