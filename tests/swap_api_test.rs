// =====================================================
// Swap API 통합 테스트
// =====================================================
// Mock Jupiter 서버를 띄워서 quote/swap 플로우 검증:
// - 견적 요청이 lamports 변환 + 전역 슬리피지로 전달되는지
// - 받은 견적이 swap 요청 바디에 그대로 실리는지
// - 업스트림 에러가 502로 매핑되는지
// =====================================================

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn quote_converts_amount_and_applies_global_slippage() {
    let jupiter = spawn_mock_jupiter(200, quote_fixture(), 200, swap_fixture()).await;
    let app = test_app(&jupiter.base_url);

    let uri = format!(
        "/api/v1/swap/quote?input_mint={}&output_mint={}&amount=1",
        SOL_MINT, USDC_MINT
    );
    let response = app.oneshot(get_request(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // 업스트림에 정확히 한 번, 변환된 값으로 호출됨
    let queries = jupiter.state.quote_queries.lock().clone();
    assert_eq!(queries.len(), 1);
    assert!(queries[0].contains(&format!("inputMint={}", SOL_MINT)));
    assert!(queries[0].contains(&format!("outputMint={}", USDC_MINT)));
    assert!(queries[0].contains("amount=1000000000"));
    assert!(queries[0].contains("slippageBps=10000"));

    // 응답은 업스트림 견적과 구조적으로 동일 (알 수 없는 필드 포함)
    let body = body_json(response).await;
    assert_eq!(body, quote_fixture());
}

#[tokio::test]
async fn quote_rejects_non_positive_amount_without_calling_upstream() {
    let jupiter = spawn_mock_jupiter(200, quote_fixture(), 200, swap_fixture()).await;
    let app = test_app(&jupiter.base_url);

    let uri = format!(
        "/api/v1/swap/quote?input_mint={}&output_mint={}&amount=0",
        SOL_MINT, USDC_MINT
    );
    let response = app.oneshot(get_request(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(jupiter.state.quote_queries.lock().is_empty());
}

#[tokio::test]
async fn quote_maps_upstream_error_to_bad_gateway() {
    let jupiter = spawn_mock_jupiter(
        400,
        json!({"error": "invalid mint"}),
        200,
        swap_fixture(),
    )
    .await;
    let app = test_app(&jupiter.base_url);

    let uri = format!(
        "/api/v1/swap/quote?input_mint={}&output_mint={}&amount=1",
        SOL_MINT, USDC_MINT
    );
    let response = app.oneshot(get_request(&uri)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn swap_transaction_forwards_quote_and_returns_payload() {
    let jupiter = spawn_mock_jupiter(200, quote_fixture(), 200, swap_fixture()).await;
    let app = test_app(&jupiter.base_url);

    let request_body = json!({
        "input_mint": SOL_MINT,
        "output_mint": USDC_MINT,
        "amount": 1.0,
        "user_public_key": TEST_WALLET
    });
    let response = app
        .oneshot(post_json("/api/v1/swap/transaction", &request_body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // 견적 조회는 swap POST 전에 정확히 한 번
    assert_eq!(jupiter.state.quote_queries.lock().len(), 1);

    // swap 요청 바디: 받은 견적 그대로 + 사용자 키 + 고정 옵션
    let swap_requests = jupiter.state.swap_requests.lock().clone();
    assert_eq!(swap_requests.len(), 1);
    assert_eq!(swap_requests[0]["quoteResponse"], quote_fixture());
    assert_eq!(swap_requests[0]["userPublicKey"], TEST_WALLET);
    assert_eq!(swap_requests[0]["dynamicComputeUnitLimit"], true);
    assert_eq!(swap_requests[0]["dynamicSlippage"]["maxBps"], 10000);

    // 응답: swapObj는 업스트림 페이로드 그대로, outAmount는 견적에서
    let body = body_json(response).await;
    assert_eq!(body["swapObj"], swap_fixture());
    assert_eq!(body["outAmount"], "500000");
    assert!(body.get("id").is_some());
}

#[tokio::test]
async fn swap_transaction_maps_upstream_error_to_bad_gateway() {
    // 견적은 성공하지만 swap POST가 업스트림에서 거부되는 경우
    let jupiter = spawn_mock_jupiter(
        200,
        quote_fixture(),
        500,
        json!({"error": "failed to build transaction"}),
    )
    .await;
    let app = test_app(&jupiter.base_url);

    let request_body = json!({
        "input_mint": SOL_MINT,
        "output_mint": USDC_MINT,
        "amount": 1.0,
        "user_public_key": TEST_WALLET
    });
    let response = app
        .oneshot(post_json("/api/v1/swap/transaction", &request_body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body.get("error").is_some());

    // 견적까지는 진행됐고 swap 호출도 한 번 나감
    assert_eq!(jupiter.state.quote_queries.lock().len(), 1);
    assert_eq!(jupiter.state.swap_requests.lock().len(), 1);
}

#[tokio::test]
async fn swap_transaction_rejects_malformed_public_key() {
    let jupiter = spawn_mock_jupiter(200, quote_fixture(), 200, swap_fixture()).await;
    let app = test_app(&jupiter.base_url);

    let request_body = json!({
        "input_mint": SOL_MINT,
        "output_mint": USDC_MINT,
        "amount": 1.0,
        "user_public_key": "not-a-valid-pubkey"
    });
    let response = app
        .oneshot(post_json("/api/v1/swap/transaction", &request_body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    // 검증 실패 시 업스트림을 호출하지 않음
    assert!(jupiter.state.quote_queries.lock().is_empty());
}

#[tokio::test]
async fn swap_transaction_is_recorded_for_listing() {
    let jupiter = spawn_mock_jupiter(200, quote_fixture(), 200, swap_fixture()).await;
    let app = test_app(&jupiter.base_url);

    let request_body = json!({
        "input_mint": SOL_MINT,
        "output_mint": USDC_MINT,
        "amount": 1.0,
        "user_public_key": TEST_WALLET
    });
    let response = app
        .clone()
        .oneshot(post_json("/api/v1/swap/transaction", &request_body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // 지갑 필터로 기록 조회
    let uri = format!("/api/v1/transactions?user_public_key={}", TEST_WALLET);
    let response = app.clone().oneshot(get_request(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let transactions = body["transactions"].as_array().unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0]["input_mint"], SOL_MINT);
    assert_eq!(transactions[0]["out_amount"], "500000");

    // 다른 지갑으로 필터하면 비어 있음
    let uri = "/api/v1/transactions?user_public_key=11111111111111111111111111111111";
    let response = app.oneshot(get_request(uri)).await.unwrap();
    let body = body_json(response).await;
    assert!(body["transactions"].as_array().unwrap().is_empty());
}
