use std::fmt;

/// Sentinel user id meaning "every user" in the results selector.
pub const ALL_USERS: i64 = -1;

/// Whose learning results to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTarget {
    #[default]
    AllUsers,
    User(i64),
}

impl ResultTarget {
    /// Map a selector value to a target; [`ALL_USERS`] selects the aggregate.
    pub fn from_user_id(user_id: i64) -> Self {
        if user_id == ALL_USERS {
            ResultTarget::AllUsers
        } else {
            ResultTarget::User(user_id)
        }
    }

    /// The selector value for this target.
    pub fn user_id(&self) -> i64 {
        match self {
            ResultTarget::AllUsers => ALL_USERS,
            ResultTarget::User(id) => *id,
        }
    }

    pub fn is_all_users(&self) -> bool {
        matches!(self, ResultTarget::AllUsers)
    }
}

impl fmt::Display for ResultTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultTarget::AllUsers => write!(f, "all users"),
            ResultTarget::User(id) => write!(f, "user {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_maps_to_all_users() {
        assert_eq!(ResultTarget::from_user_id(-1), ResultTarget::AllUsers);
        assert_eq!(ResultTarget::from_user_id(0), ResultTarget::User(0));
        assert_eq!(ResultTarget::from_user_id(15), ResultTarget::User(15));
    }

    #[test]
    fn test_user_id_roundtrip() {
        for id in [-1, 0, 1, 99] {
            assert_eq!(ResultTarget::from_user_id(id).user_id(), id);
        }
    }
}
