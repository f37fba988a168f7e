//! The two-tier principal model.
//!
//! Every node records the principal that created it, and every gated
//! operation is checked against the acting principal. There are exactly
//! two tiers; there is no per-node permission mask beyond this.

use serde::{Deserialize, Serialize};

/// Who is acting on (or who owns) a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Principal {
    /// The default tier. Casual-owned nodes are accessible to everyone.
    #[default]
    Casual,
    /// The elevated tier, entered via the shared secret. Superuser-owned
    /// nodes are accessible only to a Superuser.
    Superuser,
}

impl Principal {
    /// The label shown in listings and by `uprint`.
    pub fn label(&self) -> &'static str {
        match self {
            Principal::Casual => "Casual",
            Principal::Superuser => "Superuser",
        }
    }

    /// True for the elevated tier.
    pub fn is_superuser(&self) -> bool {
        matches!(self, Principal::Superuser)
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
