//! Authorization for session commands.

use herald_infra::discord::interaction::Member;
use herald_types::id::RoleId;

/// Discord ADMINISTRATOR permission bit.
const ADMINISTRATOR: u64 = 1 << 3;

/// Decides who may run session commands.
///
/// When a manager role is configured, only members carrying that role pass.
/// Otherwise the member's computed permission bitfield must include
/// ADMINISTRATOR.
#[derive(Debug, Clone, Copy)]
pub struct CommandGate {
    manager_role: Option<RoleId>,
}

impl CommandGate {
    pub fn new(manager_role: Option<RoleId>) -> Self {
        Self { manager_role }
    }

    pub fn permits(&self, member: &Member) -> bool {
        match self.manager_role {
            Some(role) => member.has_role(role),
            None => member
                .permission_bits()
                .is_some_and(|bits| bits & ADMINISTRATOR != 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(roles: &[u64], permissions: Option<&str>) -> Member {
        serde_json::from_value(serde_json::json!({
            "user": {"id": "77", "username": "kms"},
            "roles": roles.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
            "permissions": permissions,
        }))
        .unwrap()
    }

    #[test]
    fn test_manager_role_grants_access() {
        let gate = CommandGate::new(Some(RoleId(1456081955119431793)));
        assert!(gate.permits(&member(&[1456081955119431793], None)));
        assert!(!gate.permits(&member(&[42], None)));
    }

    #[test]
    fn test_manager_role_overrides_administrator() {
        // With a manager role configured, even an administrator without
        // that role is denied.
        let gate = CommandGate::new(Some(RoleId(30)));
        assert!(!gate.permits(&member(&[42], Some("8"))));
    }

    #[test]
    fn test_administrator_fallback() {
        let gate = CommandGate::new(None);
        assert!(gate.permits(&member(&[], Some("8"))));
        assert!(gate.permits(&member(&[], Some("2147483663"))));
        assert!(!gate.permits(&member(&[], Some("2048"))));
        assert!(!gate.permits(&member(&[], None)));
    }

    #[test]
    fn test_malformed_permission_bitfield_is_denied() {
        let gate = CommandGate::new(None);
        assert!(!gate.permits(&member(&[], Some("not-a-number"))));
    }
}
