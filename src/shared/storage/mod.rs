// In-memory stores
// 인메모리 저장소 모듈
//
// 역할: repository 계층. 이 서비스는 영속 엔티티가 없으므로
//       프로세스 수명 동안만 유지되는 RwLock 맵으로 구현
pub mod refresh_token_store;
pub mod swap_record_store;
pub mod user_store;

pub use refresh_token_store::*;
pub use swap_record_store::*;
pub use user_store::*;
