//! Session state and the user-visible notice.

use serde::Serialize;

/// Session state.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Active = 0,
    ExpiredPendingRedirect = 1,
}

impl From<u8> for SessionState {
    fn from(val: u8) -> Self {
        match val {
            1 => SessionState::ExpiredPendingRedirect,
            _ => SessionState::Active,
        }
    }
}

/// Banner shown once the session expired. It has no dismiss action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionNotice {
    pub title: &'static str,
    pub description: &'static str,
}

impl SessionNotice {
    pub fn expired() -> Self {
        Self {
            title: "Session Expired",
            description: "Your session has expired. Redirecting to the home page...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_conversion() {
        assert_eq!(SessionState::from(0), SessionState::Active);
        assert_eq!(SessionState::from(1), SessionState::ExpiredPendingRedirect);
        let expired = SessionState::ExpiredPendingRedirect;
        assert_eq!(SessionState::from(expired as u8), expired);
    }
}
