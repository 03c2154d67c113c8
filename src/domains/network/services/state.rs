// Network domain state
use crate::domains::network::services::NetworkService;
use crate::shared::config::AppConfig;

/// Network domain state
#[derive(Clone)]
pub struct NetworkState {
    pub network_service: NetworkService,
}

impl NetworkState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            network_service: NetworkService::new(config),
        }
    }
}
