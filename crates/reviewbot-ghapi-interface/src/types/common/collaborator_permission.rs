use serde::{Deserialize, Serialize};

/// GitHub collaborator permission, used to filter collaborator listings.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhCollaboratorPermission {
    /// Pull.
    Pull,
    /// Triage.
    Triage,
    /// Push.
    Push,
    /// Maintain.
    Maintain,
    /// Admin.
    Admin,
}

impl GhCollaboratorPermission {
    /// Convert to static str.
    pub fn to_str(self) -> &'static str {
        match self {
            Self::Pull => "pull",
            Self::Triage => "triage",
            Self::Push => "push",
            Self::Maintain => "maintain",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for GhCollaboratorPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}
