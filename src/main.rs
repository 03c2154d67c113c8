use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use curators_backend::routes::create_router;
use curators_backend::shared::config::AppConfig;
use curators_backend::shared::services::AppState;

// Import models for OpenAPI schema
use curators_backend::domains::auth::models::*;
use curators_backend::domains::lst::models::*;
use curators_backend::domains::network::models::*;
use curators_backend::domains::swap::models::*;
use curators_backend::domains::transaction::models::*;
use curators_backend::domains::user::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        curators_backend::domains::auth::handlers::auth_handler::signup,
        curators_backend::domains::auth::handlers::auth_handler::signin,
        curators_backend::domains::auth::handlers::auth_handler::refresh,
        curators_backend::domains::auth::handlers::auth_handler::logout,
        curators_backend::domains::auth::handlers::auth_handler::get_me,
        curators_backend::domains::user::handlers::user_handler::get_profile,
        curators_backend::domains::user::handlers::user_handler::update_profile,
        curators_backend::domains::lst::handlers::lst_handler::list_lst_tokens,
        curators_backend::domains::lst::handlers::lst_handler::get_lst_token,
        curators_backend::domains::swap::handlers::swap_handler::get_quote,
        curators_backend::domains::swap::handlers::swap_handler::create_swap_transaction,
        curators_backend::domains::network::handlers::network_handler::get_network_info,
        curators_backend::domains::network::handlers::network_handler::list_clusters,
        curators_backend::domains::transaction::handlers::transaction_handler::list_transactions,
        curators_backend::domains::transaction::handlers::transaction_handler::get_transaction,
        curators_backend::domains::transaction::handlers::transaction_handler::get_transaction_status
    ),
    components(schemas(
        SignupRequest,
        SignupResponse,
        SigninRequest,
        SigninResponse,
        RefreshTokenRequest,
        RefreshTokenResponse,
        LogoutRequest,
        UserResponse,
        UpdateProfileRequest,
        LstToken,
        LstListResponse,
        QuoteRequest,
        QuoteResponse,
        RoutePlan,
        SwapInfo,
        SwapTransactionRequest,
        SwapTransactionResponse,
        NetworkInfoResponse,
        ClusterInfo,
        ClusterListResponse,
        TransactionRecordResponse,
        TransactionListResponse,
        TransactionStatusResponse
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Authentication API endpoints"),
        (name = "Users", description = "User profile API endpoints"),
        (name = "Lst", description = "Liquid staking token API endpoints"),
        (name = "Swap", description = "Swap API endpoints (Jupiter integration)"),
        (name = "Network", description = "Network information API endpoints"),
        (name = "Transactions", description = "Swap transaction record API endpoints")
    ),
    info(
        title = "Curators Backend",
        description = "API server for liquid staking and swaps on Solana",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() {
    // 로깅 초기화 (RUST_LOG로 레벨 제어)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("curators_backend=info,tower_http=info")),
        )
        .init();

    // 설정 로드
    let config = AppConfig::from_env();

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(config.clone())
        .expect("Failed to initialize AppState");

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("Invalid CORS origin"),
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    // Router 생성: /api/v1 아래에 6개 도메인 라우터
    let app = Router::new()
        .merge(create_router())
        .merge(
            SwaggerUi::new("/docs")
                .url("/api-docs/openapi.json", ApiDoc::openapi())
        )
        .layer(cors)
        .with_state(app_state);

    // 서버 시작
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind server address");

    info!(addr = %config.bind_addr, "server listening");
    info!(jupiter = %config.jupiter_base_url, cluster = %config.cluster, "upstream configuration");

    // 서버 실행
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
