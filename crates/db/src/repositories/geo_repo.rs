//! Repositories for the `countries` and `cities` reference tables.

use sqlx::PgPool;

use crate::models::geo::{City, Country, CreateCity, CreateCountry};

/// Read-mostly access to the country reference table.
pub struct CountryRepo;

impl CountryRepo {
    /// Insert a country (seed/admin path).
    pub async fn create(pool: &PgPool, input: &CreateCountry) -> Result<Country, sqlx::Error> {
        sqlx::query_as::<_, Country>(
            "INSERT INTO countries (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    /// List all countries ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Country>, sqlx::Error> {
        sqlx::query_as::<_, Country>("SELECT id, name FROM countries ORDER BY name")
            .fetch_all(pool)
            .await
    }
}

/// Read-mostly access to the city reference table.
pub struct CityRepo;

impl CityRepo {
    /// Insert a city (seed/admin path).
    pub async fn create(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        sqlx::query_as::<_, City>(
            "INSERT INTO cities (country_id, name) VALUES ($1, $2)
             RETURNING id, country_id, name",
        )
        .bind(input.country_id)
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }

    /// List all cities ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<City>, sqlx::Error> {
        sqlx::query_as::<_, City>("SELECT id, country_id, name FROM cities ORDER BY name")
            .fetch_all(pool)
            .await
    }
}
