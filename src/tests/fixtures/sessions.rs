use crate::modules::accounts::core::session::{Role, Session};

pub fn client_session() -> Session {
    Session {
        user_id: "user-fixed-0001".to_string(),
        email: "cliente@example.com".to_string(),
        role: Some(Role::Client),
    }
}

pub fn admin_session() -> Session {
    Session {
        user_id: "admin-fixed-0001".to_string(),
        email: "studio@example.com".to_string(),
        role: Some(Role::Admin),
    }
}
