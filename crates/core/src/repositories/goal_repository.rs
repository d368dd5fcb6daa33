use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::goal::{Goal, GoalItem, NewGoal, NewGoalItem};
use walletos_primitives::schema::{goal_items, goals};

pub struct GoalRepository;

impl GoalRepository {
    pub fn find_by_id(conn: &mut PgConnection, goal_id: Uuid) -> Result<Option<Goal>, ApiError> {
        goals::table
            .find(goal_id)
            .first::<Goal>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list_owned_by(conn: &mut PgConnection, user_id: Uuid) -> Result<Vec<Goal>, ApiError> {
        goals::table
            .filter(goals::user_id.eq(user_id))
            .order(goals::deadline.asc())
            .load::<Goal>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_goal: NewGoal) -> Result<Goal, ApiError> {
        diesel::insert_into(goals::table)
            .values(&new_goal)
            .get_result::<Goal>(conn)
            .map_err(ApiError::from)
    }

    pub fn update(
        conn: &mut PgConnection,
        goal_id: Uuid,
        name: &str,
        description: Option<&str>,
        target_cents: i64,
        deadline: NaiveDate,
        target_month: Option<&str>,
    ) -> Result<Goal, ApiError> {
        diesel::update(goals::table.find(goal_id))
            .set((
                goals::name.eq(name),
                goals::description.eq(description),
                goals::target_cents.eq(target_cents),
                goals::deadline.eq(deadline),
                goals::target_month.eq(target_month),
                goals::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<Goal>(conn)
            .map_err(ApiError::from)
    }

    /// Only writer of `current_cents` (the reconciler).
    pub fn set_current_cents(
        conn: &mut PgConnection,
        goal_id: Uuid,
        current_cents: i64,
    ) -> Result<(), ApiError> {
        diesel::update(goals::table.find(goal_id))
            .set((
                goals::current_cents.eq(current_cents),
                goals::updated_at.eq(diesel::dsl::now),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }

    pub fn delete(conn: &mut PgConnection, goal_id: Uuid) -> Result<usize, ApiError> {
        diesel::delete(goals::table.find(goal_id))
            .execute(conn)
            .map_err(ApiError::from)
    }
}

pub struct GoalItemRepository;

impl GoalItemRepository {
    pub fn find_by_id(
        conn: &mut PgConnection,
        item_id: Uuid,
    ) -> Result<Option<GoalItem>, ApiError> {
        goal_items::table
            .find(item_id)
            .first::<GoalItem>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list_for_goal(
        conn: &mut PgConnection,
        goal_id: Uuid,
    ) -> Result<Vec<GoalItem>, ApiError> {
        goal_items::table
            .filter(goal_items::goal_id.eq(goal_id))
            .order(goal_items::position.asc())
            .load::<GoalItem>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_item: NewGoalItem) -> Result<GoalItem, ApiError> {
        diesel::insert_into(goal_items::table)
            .values(&new_item)
            .get_result::<GoalItem>(conn)
            .map_err(ApiError::from)
    }

    pub fn update(
        conn: &mut PgConnection,
        item_id: Uuid,
        name: &str,
        price_cents: i64,
        quantity: i32,
        position: i32,
    ) -> Result<GoalItem, ApiError> {
        diesel::update(goal_items::table.find(item_id))
            .set((
                goal_items::name.eq(name),
                goal_items::price_cents.eq(price_cents),
                goal_items::quantity.eq(quantity),
                goal_items::position.eq(position),
            ))
            .get_result::<GoalItem>(conn)
            .map_err(ApiError::from)
    }

    pub fn set_purchased(
        conn: &mut PgConnection,
        item_id: Uuid,
        purchased: bool,
    ) -> Result<(), ApiError> {
        diesel::update(goal_items::table.find(item_id))
            .set(goal_items::purchased.eq(purchased))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }

    pub fn delete(conn: &mut PgConnection, item_id: Uuid) -> Result<usize, ApiError> {
        diesel::delete(goal_items::table.find(item_id))
            .execute(conn)
            .map_err(ApiError::from)
    }
}
