//! Per-table SQL for the `movies` and `users` tables.
//!
//! Optional list filters use `(? IS NULL OR col = ?)` so one prepared
//! statement covers every filter combination; each filter value is bound twice.

use sqlx::mysql::MySqlRow;
use sqlx::Row;

use moviedb_core::{Movie, MovieFilter, MovieId, NewMovie, NewUser, User, UserFilter, UserId};

use super::mysql::{MySqlQuery, MySqlTable};

impl MySqlTable for Movie {
    const SELECT_FILTERED: &'static str = r#"
        SELECT id, title, director, year, color, duration
        FROM movies
        WHERE (? IS NULL OR color = ?)
          AND (? IS NULL OR duration <= ?)
        ORDER BY id ASC
    "#;

    const SELECT_BY_ID: &'static str =
        "SELECT id, title, director, year, color, duration FROM movies WHERE id = ?";

    const INSERT: &'static str =
        "INSERT INTO movies (title, director, year, color, duration) VALUES (?, ?, ?, ?, ?)";

    const UPDATE: &'static str = r#"
        UPDATE movies
        SET title = ?, director = ?, year = ?, color = ?, duration = ?
        WHERE id = ?
    "#;

    const DELETE: &'static str = "DELETE FROM movies WHERE id = ?";

    fn bind_fields<'q>(query: MySqlQuery<'q>, fields: &'q NewMovie) -> MySqlQuery<'q> {
        query
            .bind(fields.title.as_str())
            .bind(fields.director.as_str())
            .bind(fields.year.as_str())
            .bind(fields.color.as_str())
            .bind(fields.duration)
    }

    fn bind_filter<'q>(query: MySqlQuery<'q>, filter: &'q MovieFilter) -> MySqlQuery<'q> {
        query
            .bind(filter.color.as_deref())
            .bind(filter.color.as_deref())
            .bind(filter.max_duration)
            .bind(filter.max_duration)
    }

    fn decode_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(Movie {
            id: MovieId::new(row.try_get("id")?),
            fields: NewMovie {
                title: row.try_get("title")?,
                director: row.try_get("director")?,
                year: row.try_get("year")?,
                color: row.try_get("color")?,
                duration: row.try_get("duration")?,
            },
        })
    }
}

impl MySqlTable for User {
    const SELECT_FILTERED: &'static str = r#"
        SELECT id, firstname, lastname, email, city, language
        FROM users
        WHERE (? IS NULL OR language = ?)
          AND (? IS NULL OR city = ?)
        ORDER BY id ASC
    "#;

    const SELECT_BY_ID: &'static str =
        "SELECT id, firstname, lastname, email, city, language FROM users WHERE id = ?";

    const INSERT: &'static str =
        "INSERT INTO users (firstname, lastname, email, city, language) VALUES (?, ?, ?, ?, ?)";

    const UPDATE: &'static str = r#"
        UPDATE users
        SET firstname = ?, lastname = ?, email = ?, city = ?, language = ?
        WHERE id = ?
    "#;

    const DELETE: &'static str = "DELETE FROM users WHERE id = ?";

    fn bind_fields<'q>(query: MySqlQuery<'q>, fields: &'q NewUser) -> MySqlQuery<'q> {
        query
            .bind(fields.firstname.as_str())
            .bind(fields.lastname.as_str())
            .bind(fields.email.as_str())
            .bind(fields.city.as_str())
            .bind(fields.language.as_str())
    }

    fn bind_filter<'q>(query: MySqlQuery<'q>, filter: &'q UserFilter) -> MySqlQuery<'q> {
        query
            .bind(filter.language.as_deref())
            .bind(filter.language.as_deref())
            .bind(filter.city.as_deref())
            .bind(filter.city.as_deref())
    }

    fn decode_row(row: &MySqlRow) -> Result<Self, sqlx::Error> {
        Ok(User {
            id: UserId::new(row.try_get("id")?),
            fields: NewUser {
                firstname: row.try_get("firstname")?,
                lastname: row.try_get("lastname")?,
                email: row.try_get("email")?,
                city: row.try_get("city")?,
                language: row.try_get("language")?,
            },
        })
    }
}
