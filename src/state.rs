//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthManager, CountryService, HotelService};
use crate::infrastructure::persistence::PgUserRepository;
use crate::infrastructure::security::JwtSigner;

/// Services and resources shared by every request.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub country_service: Arc<CountryService>,
    pub hotel_service: Arc<HotelService>,
    pub auth_manager: Arc<AuthManager<PgUserRepository>>,
}

impl AppState {
    /// Wires the services around one connection pool and token signer.
    pub fn new(pool: Arc<PgPool>, signer: JwtSigner) -> Self {
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));

        Self {
            country_service: Arc::new(CountryService::new(pool.clone())),
            hotel_service: Arc::new(HotelService::new(pool.clone())),
            auth_manager: Arc::new(AuthManager::new(user_repository, signer)),
            pool,
        }
    }
}
