// =====================================================
// Auth API 통합 테스트
// =====================================================
// 회원가입 -> 로그인 -> 인증 조회 -> 토큰 갱신 -> 로그아웃 플로우 검증
// =====================================================

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn signup_signin_and_me_flow() {
    let app = test_app_without_jupiter();

    // 회원가입
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/auth/signup",
            &json!({"email": "user@example.com", "password": "password123", "username": "johndoe"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "user@example.com");
    assert_eq!(body["user"]["username"], "johndoe");

    // 중복 이메일은 거부
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/auth/signup",
            &json!({"email": "user@example.com", "password": "other-password"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // 로그인
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/auth/signin",
            &json!({"email": "user@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let access_token = body["access_token"].as_str().unwrap().to_string();
    assert!(body["refresh_token"].as_str().is_some());

    // 토큰으로 내 정보 조회
    let response = app
        .clone()
        .oneshot(get_request_with_token("/api/v1/auth/me", &access_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["email"], "user@example.com");

    // 토큰 없이 조회하면 401
    let response = app
        .oneshot(get_request("/api/v1/auth/me"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signin_rejects_wrong_password() {
    let app = test_app_without_jupiter();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/auth/signup",
            &json!({"email": "user@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_json(
            "/api/v1/auth/signin",
            &json!({"email": "user@example.com", "password": "wrong-password"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_rotates_token_and_invalidates_old_one() {
    let app = test_app_without_jupiter();

    app.clone()
        .oneshot(post_json(
            "/api/v1/auth/signup",
            &json!({"email": "user@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/auth/signin",
            &json!({"email": "user@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    let refresh_token = body["refresh_token"].as_str().unwrap().to_string();

    // 갱신: 새 access/refresh 토큰 발급
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/auth/refresh",
            &json!({"refresh_token": refresh_token}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let rotated = body["refresh_token"].as_str().unwrap().to_string();
    assert_ne!(rotated, refresh_token);

    // 회전된 이전 토큰은 재사용 불가
    let response = app
        .oneshot(post_json(
            "/api/v1/auth/refresh",
            &json!({"refresh_token": refresh_token}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_revokes_refresh_token() {
    let app = test_app_without_jupiter();

    app.clone()
        .oneshot(post_json(
            "/api/v1/auth/signup",
            &json!({"email": "user@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/auth/signin",
            &json!({"email": "user@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    let refresh_token = body["refresh_token"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/auth/logout",
            &json!({"refresh_token": refresh_token}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // 로그아웃된 토큰으로는 갱신 불가
    let response = app
        .oneshot(post_json(
            "/api/v1/auth/refresh",
            &json!({"refresh_token": refresh_token}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_update_requires_and_uses_token() {
    let app = test_app_without_jupiter();

    app.clone()
        .oneshot(post_json(
            "/api/v1/auth/signup",
            &json!({"email": "user@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/v1/auth/signin",
            &json!({"email": "user@example.com", "password": "password123"}),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    let access_token = body["access_token"].as_str().unwrap().to_string();

    // 인증된 프로필 조회
    let response = app
        .clone()
        .oneshot(get_request_with_token("/api/v1/users/me", &access_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // 사용자명 수정
    let response = app
        .clone()
        .oneshot(put_json_with_token(
            "/api/v1/users/me",
            &access_token,
            &json!({"username": "renamed"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "renamed");

    // 토큰 없이 수정하면 401
    let request = axum::http::Request::builder()
        .method("PUT")
        .uri("/api/v1/users/me")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(json!({"username": "x"}).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
