use crate::domains::lst::models::LstToken;

// LST 카탈로그 서비스
// LstService: catalog of supported liquid staking tokens
// 카탈로그는 정적 데이터 (체인 조회 없음)
#[derive(Clone)]
pub struct LstService {
    tokens: Vec<LstToken>,
}

impl LstService {
    pub fn new() -> Self {
        Self {
            tokens: supported_tokens(),
        }
    }

    /// 지원 토큰 목록
    pub fn list_tokens(&self) -> Vec<LstToken> {
        self.tokens.clone()
    }

    /// 민트 주소로 토큰 조회
    pub fn get_by_mint(&self, mint: &str) -> Option<LstToken> {
        self.tokens.iter().find(|t| t.mint == mint).cloned()
    }
}

impl Default for LstService {
    fn default() -> Self {
        Self::new()
    }
}

/// 지원하는 LST 목록
/// Supported LSTs
fn supported_tokens() -> Vec<LstToken> {
    fn token(mint: &str, symbol: &str, name: &str, decimals: u8) -> LstToken {
        LstToken {
            mint: mint.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
        }
    }

    vec![
        token(
            "J1toso1uCk3RLmjorhTtrVwY9HJ7X8V9yYac6Y7kGCPn",
            "JitoSOL",
            "Jito Staked SOL",
            9,
        ),
        token(
            "mSoLzYCxHdYgdzU16g5QSh3i5K3z3KZK7ytfqcJm7So",
            "mSOL",
            "Marinade Staked SOL",
            9,
        ),
        token(
            "bSo13r4TkiE4KumL71LsHTPpL2euBYLFx6h9HP3piy1",
            "bSOL",
            "BlazeStake Staked SOL",
            9,
        ),
        token(
            "jupSoLaHXQiZZTSfEWMTRRgpnyFm8f6sZdosWBjx93v",
            "JupSOL",
            "Jupiter Staked SOL",
            9,
        ),
        token(
            "5oVNBeEEQvYi1cX3ir8Dx5n1P7pdxydbGF2X4TxVusJm",
            "INF",
            "Infinity",
            9,
        ),
    ]
}
