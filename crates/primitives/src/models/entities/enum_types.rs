use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Collaborator role on a shared goal. Ordering is the permission lattice:
/// viewer < contributor < owner. The goal's creator is an implicit owner with
/// delete rights and is never represented by a membership row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    DbEnum,
    Display,
    EnumString,
    ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::GoalRole"]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GoalRole {
    Viewer,
    Contributor,
    Owner,
}

impl GoalRole {
    pub fn can_mutate(self) -> bool {
        self >= GoalRole::Contributor
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    DbEnum,
    Display,
    EnumString,
    ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::FriendStatus"]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FriendStatus {
    Pending,
    Accepted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ordering_is_viewer_contributor_owner() {
        assert!(GoalRole::Viewer < GoalRole::Contributor);
        assert!(GoalRole::Contributor < GoalRole::Owner);
    }

    #[test]
    fn viewer_cannot_mutate() {
        assert!(!GoalRole::Viewer.can_mutate());
        assert!(GoalRole::Contributor.can_mutate());
        assert!(GoalRole::Owner.can_mutate());
    }

    #[test]
    fn roles_round_trip_through_strings() {
        use std::str::FromStr;
        assert_eq!(GoalRole::from_str("contributor").unwrap(), GoalRole::Contributor);
        assert_eq!(GoalRole::Owner.to_string(), "owner");
    }
}
