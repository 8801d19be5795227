use crate::modules::dogs::adapters::outbound::registry_in_memory::InMemoryDogRegistry;
use crate::modules::dogs::core::registry_port::{DogRegistry, RegistryError};
use crate::modules::posts::adapters::outbound::post_log_in_memory::InMemoryPostLog;
use crate::modules::posts::core::post_log_port::PostLog;
use crate::shell::config::AppConfig;
use crate::shell::errors::{ApiError, ErrorStyle};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dogs: Arc<dyn DogRegistry + Send + Sync>,
    pub posts: Arc<dyn PostLog + Send + Sync>,
    pub error_style: ErrorStyle,
}

impl AppState {
    /// Seeded in-memory stores, built once at process start.
    pub fn seeded(config: &AppConfig) -> Self {
        Self {
            dogs: Arc::new(InMemoryDogRegistry::seeded(config.empty_registry_policy)),
            posts: Arc::new(InMemoryPostLog::seeded()),
            error_style: config.error_style,
        }
    }

    pub fn registry_error(&self, error: RegistryError) -> ApiError {
        ApiError::Registry {
            error,
            style: self.error_style,
        }
    }
}
