use diesel::prelude::*;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::enum_types::GoalRole;
use walletos_primitives::models::entities::goal::{Goal, NewSharedGoal, SharedGoal};
use walletos_primitives::schema::{goals, shared_goals};

pub struct ShareRepository;

impl ShareRepository {
    pub fn find_membership(
        conn: &mut PgConnection,
        goal_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<SharedGoal>, ApiError> {
        shared_goals::table
            .filter(shared_goals::goal_id.eq(goal_id))
            .filter(shared_goals::user_id.eq(user_id))
            .first::<SharedGoal>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(
        conn: &mut PgConnection,
        membership: NewSharedGoal,
    ) -> Result<SharedGoal, ApiError> {
        diesel::insert_into(shared_goals::table)
            .values(&membership)
            .get_result::<SharedGoal>(conn)
            .map_err(|e| {
                if matches!(
                    e,
                    diesel::result::Error::DatabaseError(
                        diesel::result::DatabaseErrorKind::UniqueViolation,
                        _
                    )
                ) {
                    ApiError::Conflict("Goal is already shared with this user".into())
                } else {
                    ApiError::from(e)
                }
            })
    }

    pub fn update_role(
        conn: &mut PgConnection,
        goal_id: Uuid,
        user_id: Uuid,
        role: GoalRole,
    ) -> Result<Option<SharedGoal>, ApiError> {
        diesel::update(
            shared_goals::table
                .filter(shared_goals::goal_id.eq(goal_id))
                .filter(shared_goals::user_id.eq(user_id)),
        )
        .set(shared_goals::role.eq(role))
        .get_result::<SharedGoal>(conn)
        .optional()
        .map_err(ApiError::from)
    }

    pub fn delete(
        conn: &mut PgConnection,
        goal_id: Uuid,
        user_id: Uuid,
    ) -> Result<usize, ApiError> {
        diesel::delete(
            shared_goals::table
                .filter(shared_goals::goal_id.eq(goal_id))
                .filter(shared_goals::user_id.eq(user_id)),
        )
        .execute(conn)
        .map_err(ApiError::from)
    }

    pub fn members_of_goal(
        conn: &mut PgConnection,
        goal_id: Uuid,
    ) -> Result<Vec<SharedGoal>, ApiError> {
        shared_goals::table
            .filter(shared_goals::goal_id.eq(goal_id))
            .load::<SharedGoal>(conn)
            .map_err(ApiError::from)
    }

    pub fn goals_shared_with(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<(SharedGoal, Goal)>, ApiError> {
        shared_goals::table
            .inner_join(goals::table)
            .filter(shared_goals::user_id.eq(user_id))
            .load::<(SharedGoal, Goal)>(conn)
            .map_err(ApiError::from)
    }
}
