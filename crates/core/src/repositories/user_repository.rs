use diesel::prelude::*;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::user::{NewUser, User};
use walletos_primitives::schema::users;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(conn: &mut PgConnection, user_id: Uuid) -> Result<Option<User>, ApiError> {
        users::table
            .find(user_id)
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_email(
        conn: &mut PgConnection,
        user_email: &str,
    ) -> Result<Option<User>, ApiError> {
        users::table
            .filter(users::email.eq(user_email))
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_user: NewUser) -> Result<User, ApiError> {
        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(conn)
            .map_err(ApiError::from)
    }

    /// First login attempt creates the account; later attempts reuse it.
    pub fn find_or_create(
        conn: &mut PgConnection,
        email: &str,
        name: Option<&str>,
    ) -> Result<User, ApiError> {
        if let Some(user) = Self::find_by_email(conn, email)? {
            return Ok(user);
        }

        let fallback = email.split('@').next().unwrap_or(email);
        Self::create(
            conn,
            NewUser {
                email,
                name: name.unwrap_or(fallback),
            },
        )
    }

    pub fn update_profile(
        conn: &mut PgConnection,
        user_id: Uuid,
        name: Option<&str>,
        monthly_income_cents: Option<i64>,
    ) -> Result<User, ApiError> {
        conn.transaction(|conn| {
            if let Some(n) = name {
                diesel::update(users::table.find(user_id))
                    .set(users::name.eq(n))
                    .execute(conn)?;
            }
            if let Some(income) = monthly_income_cents {
                diesel::update(users::table.find(user_id))
                    .set(users::monthly_income_cents.eq(income))
                    .execute(conn)?;
            }
            diesel::update(users::table.find(user_id))
                .set(users::updated_at.eq(diesel::dsl::now))
                .get_result::<User>(conn)
        })
        .map_err(ApiError::from)
    }
}
