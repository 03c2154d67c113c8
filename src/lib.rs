// curators_backend 라이브러리 루트
// Library root: exposes modules so integration tests can import them
pub mod domains;
pub mod routes;
pub mod shared;
