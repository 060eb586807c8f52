//! Diesel table definitions for the PostgreSQL schema.
//!
//! Keep in step with `backend/migrations`; `diesel print-schema` against a
//! migrated database regenerates this file.

diesel::table! {
    /// Registered accounts.
    profiles (id) {
        id -> Uuid,
        /// Unique, at most 20 characters.
        nickname -> Varchar,
        /// Argon2 PHC string.
        password_hash -> Text,
        /// Unique invite code.
        invite_code -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// One lunch slot per user and weekday.
    schedules (user_id, day_of_week) {
        user_id -> Uuid,
        /// 0 = Monday through 6 = Sunday.
        day_of_week -> Int2,
        neighborhood -> Varchar,
        start_time -> Time,
        end_time -> Time,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Directed friendship edges; every friendship is stored both ways.
    friendships (user_id, friend_id) {
        user_id -> Uuid,
        friend_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(schedules -> profiles (user_id));

diesel::allow_tables_to_appear_in_same_query!(friendships, profiles, schedules);
