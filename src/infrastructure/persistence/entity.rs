//! Per-entity persistence metadata consumed by the generic repository.
//!
//! An [`Entity`] describes its table, how its columns are bound for inserts
//! and updates, how its query specifications translate into `WHERE` clauses,
//! and how its relations are eagerly loaded.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, PgConnection, Postgres, QueryBuilder};
use std::collections::HashMap;

use crate::domain::entities::{Country, Hotel, NewCountry, NewHotel};
use crate::domain::queries::{CountryQuery, CountryRelation, HotelQuery, HotelRelation};

/// A persisted record kind with a `BIGINT` identity column named `id`.
#[async_trait]
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + Sized + 'static {
    /// Table name.
    const TABLE: &'static str;
    /// Selected columns, identity first.
    const COLUMNS: &'static str;
    /// Columns written on insert, in the order [`Entity::push_insert_values`] binds them.
    const INSERT_COLUMNS: &'static str;

    /// Creation input; carries no identity.
    type New: Send + Sync;
    /// Single-record lookup specification.
    type Query: Send + Sync;
    /// Relations that can be eagerly loaded.
    type Relation: Copy + Eq + Send + Sync;

    fn id(&self) -> i64;

    /// Binds one value per entry of [`Entity::INSERT_COLUMNS`].
    fn push_insert_values(new: &Self::New, row: &mut Separated<'_, '_, Postgres, &'static str>);

    /// Pushes `column = value` assignments for every mutable column.
    fn push_assignments(&self, set: &mut Separated<'_, '_, Postgres, &'static str>);

    /// Appends the `WHERE` clause selecting the records matching `query`.
    fn push_filter(query: &Self::Query, qb: &mut QueryBuilder<'_, Postgres>);

    /// Populates the requested relations on every item.
    async fn load_relations(
        items: &mut [Self],
        include: &[Self::Relation],
        conn: &mut PgConnection,
    ) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl Entity for Country {
    const TABLE: &'static str = "countries";
    const COLUMNS: &'static str = "id, name, short_name";
    const INSERT_COLUMNS: &'static str = "name, short_name";

    type New = NewCountry;
    type Query = CountryQuery;
    type Relation = CountryRelation;

    fn id(&self) -> i64 {
        self.id
    }

    fn push_insert_values(new: &NewCountry, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(new.name.clone())
            .push_bind(new.short_name.clone());
    }

    fn push_assignments(&self, set: &mut Separated<'_, '_, Postgres, &'static str>) {
        set.push("name = ").push_bind_unseparated(self.name.clone());
        set.push("short_name = ")
            .push_bind_unseparated(self.short_name.clone());
    }

    fn push_filter(query: &CountryQuery, qb: &mut QueryBuilder<'_, Postgres>) {
        match query {
            CountryQuery::ById(id) => {
                qb.push(" WHERE id = ").push_bind(*id);
            }
            CountryQuery::ByName(name) => {
                qb.push(" WHERE lower(name) = lower(")
                    .push_bind(name.clone())
                    .push(")");
            }
            CountryQuery::ByShortName(short_name) => {
                qb.push(" WHERE lower(short_name) = lower(")
                    .push_bind(short_name.clone())
                    .push(")");
            }
        }
    }

    async fn load_relations(
        items: &mut [Country],
        include: &[CountryRelation],
        conn: &mut PgConnection,
    ) -> Result<(), sqlx::Error> {
        if items.is_empty() || !include.contains(&CountryRelation::Hotels) {
            return Ok(());
        }

        let ids: Vec<i64> = items.iter().map(|c| c.id).collect();
        let hotels = sqlx::query_as::<_, Hotel>(
            r#"
            SELECT id, name, address, rating, country_id
            FROM hotels
            WHERE country_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&ids[..])
        .fetch_all(&mut *conn)
        .await?;

        let mut by_country: HashMap<i64, Vec<Hotel>> = HashMap::new();
        for hotel in hotels {
            by_country.entry(hotel.country_id).or_default().push(hotel);
        }

        for country in items.iter_mut() {
            country.hotels = Some(by_country.remove(&country.id).unwrap_or_default());
        }

        Ok(())
    }
}

#[async_trait]
impl Entity for Hotel {
    const TABLE: &'static str = "hotels";
    const COLUMNS: &'static str = "id, name, address, rating, country_id";
    const INSERT_COLUMNS: &'static str = "name, address, rating, country_id";

    type New = NewHotel;
    type Query = HotelQuery;
    type Relation = HotelRelation;

    fn id(&self) -> i64 {
        self.id
    }

    fn push_insert_values(new: &NewHotel, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(new.name.clone())
            .push_bind(new.address.clone())
            .push_bind(new.rating)
            .push_bind(new.country_id);
    }

    fn push_assignments(&self, set: &mut Separated<'_, '_, Postgres, &'static str>) {
        set.push("name = ").push_bind_unseparated(self.name.clone());
        set.push("address = ")
            .push_bind_unseparated(self.address.clone());
        set.push("rating = ").push_bind_unseparated(self.rating);
        set.push("country_id = ")
            .push_bind_unseparated(self.country_id);
    }

    fn push_filter(query: &HotelQuery, qb: &mut QueryBuilder<'_, Postgres>) {
        match query {
            HotelQuery::ById(id) => {
                qb.push(" WHERE id = ").push_bind(*id);
            }
            HotelQuery::ByName(name) => {
                qb.push(" WHERE lower(name) = lower(")
                    .push_bind(name.clone())
                    .push(")");
            }
        }
    }

    async fn load_relations(
        items: &mut [Hotel],
        include: &[HotelRelation],
        conn: &mut PgConnection,
    ) -> Result<(), sqlx::Error> {
        if items.is_empty() || !include.contains(&HotelRelation::Country) {
            return Ok(());
        }

        let mut ids: Vec<i64> = items.iter().map(|h| h.country_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let countries: HashMap<i64, Country> = sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name, short_name
            FROM countries
            WHERE id = ANY($1)
            "#,
        )
        .bind(&ids[..])
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

        for hotel in items.iter_mut() {
            hotel.country = countries.get(&hotel.country_id).cloned();
        }

        Ok(())
    }
}
