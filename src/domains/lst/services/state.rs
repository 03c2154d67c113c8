// LST domain state
use crate::domains::lst::services::LstService;

/// LST domain state
#[derive(Clone, Default)]
pub struct LstState {
    pub lst_service: LstService,
}

impl LstState {
    pub fn new() -> Self {
        Self {
            lst_service: LstService::new(),
        }
    }
}
