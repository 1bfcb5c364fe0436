use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Staff role stored on the profile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Manager,
    /// Customer service.
    Cs,
}

impl Role {
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Manager => "Manager",
            Role::Cs => "Customer Service",
        }
    }
}

/// Authenticated user's profile, fetched once after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub role: Role,
    pub email: String,
}

/// Capability-set visibility check: an item is visible when the set of
/// roles it requires intersects the roles the user holds.
///
/// An item requiring no roles is visible to everyone.
pub fn is_visible(required: &[Role], granted: &[Role]) -> bool {
    required.is_empty() || required.iter().any(|r| granted.contains(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_requirement_is_public() {
        assert!(is_visible(&[], &[Role::Cs]));
        assert!(is_visible(&[], &[]));
    }

    #[test]
    fn visible_when_sets_intersect() {
        assert!(is_visible(&[Role::Owner, Role::Manager], &[Role::Manager]));
        assert!(!is_visible(&[Role::Owner, Role::Manager], &[Role::Cs]));
        assert!(!is_visible(&[Role::Owner], &[]));
    }
}
