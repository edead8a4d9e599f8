//! Status and role enums.

use serde::{Deserialize, Serialize};

/// Role attached to a user profile.
///
/// Mirrors the role claim of the external identity record. VIP content is
/// visible to `Vip` and `Admin` profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "shop.user_role", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular shopper.
    #[default]
    Customer,
    /// Member of the VIP tier.
    Vip,
    /// Store staff.
    Admin,
}

impl UserRole {
    /// Whether this role may see VIP-only products and content.
    #[must_use]
    pub const fn has_vip_access(self) -> bool {
        matches!(self, Self::Vip | Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Vip => write!(f, "vip"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "vip" => Ok(Self::Vip),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vip_access() {
        assert!(!UserRole::Customer.has_vip_access());
        assert!(UserRole::Vip.has_vip_access());
        assert!(UserRole::Admin.has_vip_access());
    }

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [UserRole::Customer, UserRole::Vip, UserRole::Admin] {
            assert_eq!(role.to_string().parse::<UserRole>(), Ok(role));
        }
        assert!("owner".parse::<UserRole>().is_err());
    }
}
