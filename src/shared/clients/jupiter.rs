use crate::domains::swap::models::QuoteResponse;
use anyhow::{Context, Result};
use serde_json::json;
use solana_sdk::native_token::sol_to_lamports;
use tracing::debug;

// Jupiter API 클라이언트
// Jupiter API client for external calls
// 역할: NestJS의 HttpClient나 axios 같은 것
//
// base URL과 슬리피지는 설정에서 주입됨 (테스트에서 mock 서버로 교체 가능)
// Base URL and slippage are injected from config, so tests can point the
// client at a local mock server.
#[derive(Clone)]
pub struct JupiterClient {
    http_client: reqwest::Client,
    base_url: String,
    slippage_bps: u32,
}

impl JupiterClient {
    // 클라이언트 생성
    // Create new Jupiter client instance
    pub fn new(base_url: &str, slippage_bps: u32) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            slippage_bps,
        })
    }

    /// Quote URL 생성
    /// Build the quote request URL.
    /// amount는 lamports (최소 단위) 기준
    fn quote_url(&self, input_mint: &str, output_mint: &str, amount: u64) -> String {
        format!(
            "{}/quote?inputMint={}&outputMint={}&amount={}&slippageBps={}",
            self.base_url, input_mint, output_mint, amount, self.slippage_bps
        )
    }

    // Quote 조회: Jupiter API 호출
    // Get quote: call Jupiter API
    //
    // amount는 네이티브 자산의 whole unit (SOL). lamports 변환은 여기서 수행.
    // Note: LAMPORTS_PER_SOL 곱셈은 입력 토큰이 네이티브 자산일 때만 올바름.
    //       다른 decimals를 갖는 토큰은 per-token 조회가 필요함 (현재 미지원).
    // The conversion is only correct when the input token is native SOL;
    // tokens with other decimal counts would need a per-token lookup.
    pub async fn get_quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: f64,
    ) -> Result<QuoteResponse> {
        let lamports = sol_to_lamports(amount);
        let url = self.quote_url(input_mint, output_mint, lamports);

        debug!(%url, "requesting Jupiter quote");

        // HTTP GET 요청
        let response = self
            .http_client
            .get(&url)
            .header("User-Agent", "curators-backend/1.0")
            .send()
            .await
            .context("Failed to send request to Jupiter API")?;

        // HTTP 상태 코드 확인
        // Check HTTP status code
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Jupiter API returned error: {} - {}", status, body);
        }

        // 원본 응답을 로그로 남긴 뒤 JSON 파싱
        // Log the raw body, then parse
        let body = response
            .text()
            .await
            .context("Failed to read Jupiter API response body")?;

        debug!(body = %body, "Jupiter quote response");

        let quote: QuoteResponse = serde_json::from_str(&body)
            .context("Failed to parse Jupiter API response")?;

        Ok(quote)
    }

    // 스왑 트랜잭션 생성: Jupiter Swap API 호출
    // Create swap transaction: call Jupiter Swap API
    //
    // quote는 받은 그대로 quoteResponse에 실어서 보냄.
    // 응답 스키마는 Jupiter 소유이므로 opaque JSON으로 반환.
    pub async fn get_swap_transaction(
        &self,
        quote: &QuoteResponse,
        user_public_key: &str,
    ) -> Result<serde_json::Value> {
        let url = format!("{}/swap", self.base_url);

        debug!(%url, user_public_key, "requesting Jupiter swap transaction");

        // 요청 본문 생성 (Jupiter API 형식에 맞춤)
        // Build request body (according to Jupiter API format)
        let request_body = json!({
            "quoteResponse": quote,
            "userPublicKey": user_public_key,
            "dynamicComputeUnitLimit": true,
            "dynamicSlippage": { "maxBps": self.slippage_bps },
        });

        // HTTP POST 요청
        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("User-Agent", "curators-backend/1.0")
            .json(&request_body)
            .send()
            .await
            .context("Failed to send request to Jupiter Swap API")?;

        // HTTP 상태 코드 확인
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Jupiter Swap API returned error: {} - {}", status, body);
        }

        // JSON 파싱 (opaque payload)
        let swap_obj: serde_json::Value = response
            .json()
            .await
            .context("Failed to parse Jupiter Swap API response")?;

        debug!(swap_obj = %swap_obj, "Jupiter swap transaction");

        Ok(swap_obj)
    }
}
