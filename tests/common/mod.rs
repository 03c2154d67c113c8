// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 역할:
// 1. 테스트용 Router 구성 (mock Jupiter 서버를 바라봄)
// 2. Jupiter quote/swap 엔드포인트 mock 서버
//    (수신한 요청을 캡처해서 테스트에서 검증)
// =====================================================

#![allow(dead_code)]

use axum::{
    body::Body,
    extract::{RawQuery, State},
    http::{Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use curators_backend::routes::create_router;
use curators_backend::shared::config::{AppConfig, GLOBAL_SLIPPAGE_BPS};
use curators_backend::shared::services::AppState;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Mock Jupiter 서버의 공유 상태 (설정된 응답 + 캡처된 요청)
pub struct MockJupiterState {
    pub quote_status: u16,
    pub quote_body: Value,
    pub swap_status: u16,
    pub swap_body: Value,
    /// 캡처된 quote GET 쿼리 문자열
    pub quote_queries: Mutex<Vec<String>>,
    /// 캡처된 swap POST 바디
    pub swap_requests: Mutex<Vec<Value>>,
}

/// 실행 중인 mock Jupiter 서버 핸들
pub struct MockJupiter {
    pub base_url: String,
    pub state: Arc<MockJupiterState>,
}

async fn mock_quote_handler(
    State(state): State<Arc<MockJupiterState>>,
    RawQuery(query): RawQuery,
) -> (StatusCode, Json<Value>) {
    state.quote_queries.lock().push(query.unwrap_or_default());
    (
        StatusCode::from_u16(state.quote_status).unwrap(),
        Json(state.quote_body.clone()),
    )
}

async fn mock_swap_handler(
    State(state): State<Arc<MockJupiterState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.swap_requests.lock().push(body);
    (
        StatusCode::from_u16(state.swap_status).unwrap(),
        Json(state.swap_body.clone()),
    )
}

/// Mock Jupiter 서버 실행 (127.0.0.1 임의 포트)
pub async fn spawn_mock_jupiter(
    quote_status: u16,
    quote_body: Value,
    swap_status: u16,
    swap_body: Value,
) -> MockJupiter {
    let state = Arc::new(MockJupiterState {
        quote_status,
        quote_body,
        swap_status,
        swap_body,
        quote_queries: Mutex::new(Vec::new()),
        swap_requests: Mutex::new(Vec::new()),
    });

    let router = Router::new()
        .route("/quote", get(mock_quote_handler))
        .route("/swap", post(mock_swap_handler))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockJupiter {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// 테스트용 설정 (Jupiter base URL 주입)
pub fn test_config(jupiter_base_url: &str) -> AppConfig {
    AppConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        cors_origin: "http://localhost:3003".to_string(),
        jupiter_base_url: jupiter_base_url.to_string(),
        slippage_bps: GLOBAL_SLIPPAGE_BPS,
        rpc_url: "http://127.0.0.1:8899".to_string(),
        cluster: "devnet".to_string(),
        jwt_secret: "test-secret".to_string(),
    }
}

/// 테스트용 Router 생성
pub fn test_app(jupiter_base_url: &str) -> Router {
    let app_state = AppState::new(test_config(jupiter_base_url)).unwrap();
    Router::new().merge(create_router()).with_state(app_state)
}

/// Jupiter를 호출하지 않는 테스트용 Router
/// (닫힌 포트를 바라보므로 실제 호출이 나가면 에러가 남)
pub fn test_app_without_jupiter() -> Router {
    test_app("http://127.0.0.1:9")
}

/// GET 요청 빌더
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Bearer 토큰이 붙은 GET 요청 빌더
pub fn get_request_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// JSON POST 요청 빌더
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Bearer 토큰이 붙은 JSON PUT 요청 빌더
pub fn put_json_with_token(uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// 응답 바디를 JSON으로 파싱
pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// SOL -> USDC 견적 fixture (outAmount 500000)
pub fn quote_fixture() -> Value {
    json!({
        "inputMint": SOL_MINT,
        "inAmount": "1000000000",
        "outputMint": USDC_MINT,
        "outAmount": "500000",
        "otherAmountThreshold": "0",
        "swapMode": "ExactIn",
        "slippageBps": 10000,
        "priceImpactPct": "0.01",
        "routePlan": [{
            "swapInfo": {
                "ammKey": "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8",
                "label": "Raydium",
                "inputMint": SOL_MINT,
                "outputMint": USDC_MINT,
                "inAmount": "1000000000",
                "outAmount": "500000",
                "feeAmount": "2500000",
                "feeMint": SOL_MINT
            },
            "percent": 100
        }],
        "contextSlot": 268000000u64,
        "timeTaken": 0.042
    })
}

/// 스왑 트랜잭션 응답 fixture (내용은 그대로 전달되는 opaque payload)
pub fn swap_fixture() -> Value {
    json!({
        "swapTransaction": "AQAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=",
        "lastValidBlockHeight": 268000123u64,
        "prioritizationFeeLamports": 5000
    })
}

pub const SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// 유효한 base58 지갑 공개 키
pub const TEST_WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";
