use crate::app_state::AppState;
use crate::repositories::goal_repository::GoalRepository;
use crate::repositories::share_repository::ShareRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::notification_service::NotificationService;
use diesel::PgConnection;
use tracing::info;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::dtos::social_dto::SharedGoalView;
use walletos_primitives::models::entities::enum_types::GoalRole;
use walletos_primitives::models::entities::goal::{Goal, NewSharedGoal, SharedGoal};

/// How a user relates to a goal. The creator sits outside the role table and
/// outranks every membership, including the right to delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalAccess {
    Creator,
    Member(GoalRole),
}

impl GoalAccess {
    pub fn can_mutate(self) -> bool {
        match self {
            GoalAccess::Creator => true,
            GoalAccess::Member(role) => role.can_mutate(),
        }
    }

    pub fn is_creator(self) -> bool {
        matches!(self, GoalAccess::Creator)
    }
}

pub struct SharingService;

impl SharingService {
    pub fn access_for(
        conn: &mut PgConnection,
        goal: &Goal,
        user_id: Uuid,
    ) -> Result<Option<GoalAccess>, ApiError> {
        if goal.user_id == user_id {
            return Ok(Some(GoalAccess::Creator));
        }
        Ok(ShareRepository::find_membership(conn, goal.id, user_id)?
            .map(|m| GoalAccess::Member(m.role)))
    }

    /// Loads the goal and checks the caller can read it (any member or the
    /// creator).
    pub fn goal_for_read(
        conn: &mut PgConnection,
        goal_id: Uuid,
        user_id: Uuid,
    ) -> Result<Goal, ApiError> {
        let goal = GoalRepository::find_by_id(conn, goal_id)?
            .ok_or_else(|| ApiError::NotFound("Goal not found".into()))?;
        Self::access_for(conn, &goal, user_id)?
            .ok_or_else(|| ApiError::Forbidden("Not a participant of this goal".into()))?;
        Ok(goal)
    }

    /// Contributor or above (or the creator).
    pub fn goal_for_mutation(
        conn: &mut PgConnection,
        goal_id: Uuid,
        user_id: Uuid,
    ) -> Result<Goal, ApiError> {
        let goal = GoalRepository::find_by_id(conn, goal_id)?
            .ok_or_else(|| ApiError::NotFound("Goal not found".into()))?;
        let access = Self::access_for(conn, &goal, user_id)?
            .ok_or_else(|| ApiError::Forbidden("Not a participant of this goal".into()))?;
        if !access.can_mutate() {
            return Err(ApiError::Forbidden("Viewers cannot modify this goal".into()));
        }
        Ok(goal)
    }

    /// Creator-only surface: delete and membership management.
    pub fn goal_for_creator(
        conn: &mut PgConnection,
        goal_id: Uuid,
        user_id: Uuid,
    ) -> Result<Goal, ApiError> {
        let goal = GoalRepository::find_by_id(conn, goal_id)?
            .ok_or_else(|| ApiError::NotFound("Goal not found".into()))?;
        if goal.user_id != user_id {
            return Err(ApiError::Forbidden(
                "Only the goal's creator may do this".into(),
            ));
        }
        Ok(goal)
    }

    pub async fn share_goal(
        state: &AppState,
        actor_id: Uuid,
        goal_id: Uuid,
        invitee_id: Uuid,
        role: GoalRole,
    ) -> Result<SharedGoal, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;

        let goal = Self::goal_for_creator(&mut conn, goal_id, actor_id)?;

        let invitee = UserRepository::find_by_id(&mut conn, invitee_id)?
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

        if invitee.id == goal.user_id {
            return Err(ApiError::Conflict(
                "The creator already has full access".into(),
            ));
        }

        if ShareRepository::find_membership(&mut conn, goal_id, invitee_id)?.is_some() {
            return Err(ApiError::Conflict(
                "Goal is already shared with this user".into(),
            ));
        }

        let membership = ShareRepository::create(
            &mut conn,
            NewSharedGoal {
                goal_id,
                user_id: invitee_id,
                role,
            },
        )?;

        NotificationService::notify(
            &mut conn,
            invitee.id,
            "goal_shared",
            "A goal was shared with you",
            &format!("You can now follow \"{}\" as {}", goal.name, role),
            Some(&format!("/goals/{}", goal.id)),
        );

        info!(%goal_id, invitee = %invitee_id, %role, "Goal shared");
        Ok(membership)
    }

    pub async fn update_role(
        state: &AppState,
        actor_id: Uuid,
        goal_id: Uuid,
        member_id: Uuid,
        role: GoalRole,
    ) -> Result<SharedGoal, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        Self::goal_for_creator(&mut conn, goal_id, actor_id)?;

        ShareRepository::update_role(&mut conn, goal_id, member_id, role)?
            .ok_or_else(|| ApiError::NotFound("Membership not found".into()))
    }

    pub async fn unshare(
        state: &AppState,
        actor_id: Uuid,
        goal_id: Uuid,
        member_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        Self::goal_for_creator(&mut conn, goal_id, actor_id)?;

        let deleted = ShareRepository::delete(&mut conn, goal_id, member_id)?;
        if deleted == 0 {
            return Err(ApiError::NotFound("Membership not found".into()));
        }
        Ok(())
    }

    pub async fn shared_with_me(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<Vec<SharedGoalView>, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let rows = ShareRepository::goals_shared_with(&mut conn, user_id)?;
        Ok(rows
            .into_iter()
            .map(|(membership, goal)| SharedGoalView {
                goal,
                role: membership.role,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator_outranks_every_member() {
        assert!(GoalAccess::Creator.can_mutate());
        assert!(GoalAccess::Creator.is_creator());
        assert!(!GoalAccess::Member(GoalRole::Owner).is_creator());
    }

    #[test]
    fn member_mutation_follows_role_order() {
        assert!(!GoalAccess::Member(GoalRole::Viewer).can_mutate());
        assert!(GoalAccess::Member(GoalRole::Contributor).can_mutate());
        assert!(GoalAccess::Member(GoalRole::Owner).can_mutate());
    }
}
