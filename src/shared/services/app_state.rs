use crate::domains::auth::services::state::AuthState;
use crate::domains::auth::services::JwtService;
use crate::domains::lst::services::state::LstState;
use crate::domains::network::services::state::NetworkState;
use crate::domains::swap::services::state::SwapState;
use crate::domains::transaction::services::state::TransactionState;
use crate::domains::user::services::state::UserState;
use crate::shared::clients::JupiterClient;
use crate::shared::config::AppConfig;
use crate::shared::storage::{RefreshTokenStore, SwapRecordStore, UserStore};
use anyhow::Result;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 역할: 라우트 핸들러들이 공유하는 서비스 레지스트리.
/// 각 도메인의 State를 조합하여 전체 애플리케이션 상태를 관리
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub auth_state: AuthState,
    pub user_state: UserState,
    pub lst_state: LstState,
    pub swap_state: SwapState,
    pub network_state: NetworkState,
    pub transaction_state: TransactionState,
}

impl AppState {
    /// Create AppState from configuration
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(config: AppConfig) -> Result<Self> {
        // 1. 공유 서비스/저장소 생성
        let jwt_service = JwtService::new(config.jwt_secret.clone());
        let user_store = UserStore::new();
        let refresh_token_store = RefreshTokenStore::new();
        let swap_record_store = SwapRecordStore::new();
        let jupiter_client = JupiterClient::new(&config.jupiter_base_url, config.slippage_bps)?;

        // 2. 각 도메인 State 생성
        let auth_state = AuthState::new(
            user_store.clone(),
            refresh_token_store,
            jwt_service,
        );
        let user_state = UserState::new(user_store);
        let lst_state = LstState::new();
        let swap_state = SwapState::new(jupiter_client, swap_record_store.clone());
        let network_state = NetworkState::new(config.clone());
        let transaction_state = TransactionState::new(swap_record_store, &config.rpc_url);

        // 3. AppState 조합
        Ok(Self {
            config,
            auth_state,
            user_state,
            lst_state,
            swap_state,
            network_state,
            transaction_state,
        })
    }
}
