//! Typed query specifications and loadable relations.
//!
//! Lookups are expressed as small enums instead of open-ended predicates, and
//! eager loading is requested with relation enums instead of relation names.

/// Ways to look up a single country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryQuery {
    ById(i64),
    /// Case-insensitive match on the full name.
    ByName(String),
    /// Case-insensitive match on the abbreviation.
    ByShortName(String),
}

/// Relations that can be eagerly loaded with a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryRelation {
    Hotels,
}

/// Ways to look up a single hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelQuery {
    ById(i64),
    /// Case-insensitive match on the hotel name.
    ByName(String),
}

/// Relations that can be eagerly loaded with a hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotelRelation {
    Country,
}
