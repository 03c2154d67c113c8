// User domain state
use crate::domains::user::services::UserService;
use crate::shared::storage::UserStore;

/// User domain state
#[derive(Clone)]
pub struct UserState {
    pub user_service: UserService,
}

impl UserState {
    pub fn new(users: UserStore) -> Self {
        Self {
            user_service: UserService::new(users),
        }
    }
}
