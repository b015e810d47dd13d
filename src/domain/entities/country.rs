//! Country entity.

use super::hotel::Hotel;

/// A country listed by the service.
///
/// `hotels` is only populated when the query that loaded the country asked
/// for the hotels relation; otherwise it is `None`, which is distinct from a
/// loaded but empty collection.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub short_name: String,
    #[sqlx(skip)]
    pub hotels: Option<Vec<Hotel>>,
}

impl Country {
    pub fn new(id: i64, name: String, short_name: String) -> Self {
        Self {
            id,
            name,
            short_name,
            hotels: None,
        }
    }
}

/// Input data for creating a new country. The identity is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCountry {
    pub name: String,
    pub short_name: String,
}
