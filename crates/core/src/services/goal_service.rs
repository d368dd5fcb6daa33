use crate::app_state::AppState;
use crate::repositories::goal_repository::{GoalItemRepository, GoalRepository};
use crate::services::notification_service::NotificationService;
use crate::services::sharing_service::SharingService;
use tracing::info;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::dtos::goal_dto::{
    CreateGoalItemRequest, CreateGoalRequest, UpdateGoalItemRequest, UpdateGoalRequest,
};
use walletos_primitives::models::entities::goal::{Goal, GoalItem, NewGoal, NewGoalItem};

pub struct GoalService;

impl GoalService {
    pub async fn list_owned(state: &AppState, user_id: Uuid) -> Result<Vec<Goal>, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        GoalRepository::list_owned_by(&mut conn, user_id)
    }

    pub async fn get(state: &AppState, user_id: Uuid, goal_id: Uuid) -> Result<Goal, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        SharingService::goal_for_read(&mut conn, goal_id, user_id)
    }

    pub async fn create(
        state: &AppState,
        user_id: Uuid,
        payload: CreateGoalRequest,
    ) -> Result<Goal, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let goal = GoalRepository::create(
            &mut conn,
            NewGoal {
                user_id,
                name: &payload.name,
                description: payload.description.as_deref(),
                target_cents: payload.target_cents,
                deadline: payload.deadline,
                target_month: payload.target_month.as_deref(),
            },
        )?;
        info!(goal_id = %goal.id, %user_id, "Goal created");
        Ok(goal)
    }

    pub async fn update(
        state: &AppState,
        user_id: Uuid,
        goal_id: Uuid,
        payload: UpdateGoalRequest,
    ) -> Result<Goal, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let existing = SharingService::goal_for_mutation(&mut conn, goal_id, user_id)?;

        // Absent keeps the stored value, explicit null clears it.
        let description = match &payload.description {
            Some(value) => value.as_deref(),
            None => existing.description.as_deref(),
        };
        let target_month = match &payload.target_month {
            Some(value) => value.as_deref(),
            None => existing.target_month.as_deref(),
        };

        let updated = GoalRepository::update(
            &mut conn,
            goal_id,
            payload.name.as_deref().unwrap_or(&existing.name),
            description,
            payload.target_cents.unwrap_or(existing.target_cents),
            payload.deadline.unwrap_or(existing.deadline),
            target_month,
        )?;

        NotificationService::notify_goal_participants(
            &mut conn,
            &updated,
            user_id,
            "goal_updated",
            "Goal updated",
            &format!("\"{}\" was updated", updated.name),
        );

        Ok(updated)
    }

    /// Creator-only. Linked expenses keep their rows; shared memberships,
    /// items, and chat go with the goal via FK cascade.
    pub async fn delete(state: &AppState, user_id: Uuid, goal_id: Uuid) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let goal = SharingService::goal_for_creator(&mut conn, goal_id, user_id)?;

        NotificationService::notify_goal_participants(
            &mut conn,
            &goal,
            user_id,
            "goal_deleted",
            "Goal deleted",
            &format!("\"{}\" was deleted by its owner", goal.name),
        );

        GoalRepository::delete(&mut conn, goal_id)?;
        info!(%goal_id, %user_id, "Goal deleted");
        Ok(())
    }

    pub async fn list_items(
        state: &AppState,
        user_id: Uuid,
        goal_id: Uuid,
    ) -> Result<Vec<GoalItem>, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        SharingService::goal_for_read(&mut conn, goal_id, user_id)?;
        GoalItemRepository::list_for_goal(&mut conn, goal_id)
    }

    pub async fn create_item(
        state: &AppState,
        user_id: Uuid,
        goal_id: Uuid,
        payload: CreateGoalItemRequest,
    ) -> Result<GoalItem, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let goal = SharingService::goal_for_mutation(&mut conn, goal_id, user_id)?;

        let item = GoalItemRepository::create(
            &mut conn,
            NewGoalItem {
                goal_id,
                name: &payload.name,
                price_cents: payload.price_cents,
                quantity: payload.quantity,
                position: payload.position,
            },
        )?;

        NotificationService::notify_goal_participants(
            &mut conn,
            &goal,
            user_id,
            "goal_updated",
            "Goal updated",
            &format!("\"{}\" was added to \"{}\"", item.name, goal.name),
        );

        Ok(item)
    }

    pub async fn update_item(
        state: &AppState,
        user_id: Uuid,
        goal_id: Uuid,
        item_id: Uuid,
        payload: UpdateGoalItemRequest,
    ) -> Result<GoalItem, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let goal = SharingService::goal_for_mutation(&mut conn, goal_id, user_id)?;

        let existing = Self::item_in_goal(&mut conn, goal_id, item_id)?;

        let item = GoalItemRepository::update(
            &mut conn,
            item_id,
            payload.name.as_deref().unwrap_or(&existing.name),
            payload.price_cents.unwrap_or(existing.price_cents),
            payload.quantity.unwrap_or(existing.quantity),
            payload.position.unwrap_or(existing.position),
        )?;

        NotificationService::notify_goal_participants(
            &mut conn,
            &goal,
            user_id,
            "goal_updated",
            "Goal updated",
            &format!("\"{}\" was updated in \"{}\"", item.name, goal.name),
        );

        Ok(item)
    }

    pub async fn delete_item(
        state: &AppState,
        user_id: Uuid,
        goal_id: Uuid,
        item_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let goal = SharingService::goal_for_mutation(&mut conn, goal_id, user_id)?;
        let item = Self::item_in_goal(&mut conn, goal_id, item_id)?;
        GoalItemRepository::delete(&mut conn, item_id)?;

        NotificationService::notify_goal_participants(
            &mut conn,
            &goal,
            user_id,
            "goal_updated",
            "Goal updated",
            &format!("\"{}\" was removed from \"{}\"", item.name, goal.name),
        );

        Ok(())
    }

    fn item_in_goal(
        conn: &mut diesel::PgConnection,
        goal_id: Uuid,
        item_id: Uuid,
    ) -> Result<GoalItem, ApiError> {
        let item = GoalItemRepository::find_by_id(conn, item_id)?
            .ok_or_else(|| ApiError::NotFound("Goal item not found".into()))?;
        if item.goal_id != goal_id {
            return Err(ApiError::NotFound("Goal item not found".into()));
        }
        Ok(item)
    }
}
