//! Generic repository over any [`Entity`].

use sqlx::{Postgres, QueryBuilder};
use std::marker::PhantomData;

use super::entity::Entity;
use super::unit_of_work::Session;
use crate::domain::paging::{Page, PageRequest};
use crate::error::AppError;

/// CRUD and query operations for one entity kind, bound to a unit of work.
///
/// A repository borrows the unit's transaction exclusively, so every read
/// sees the writes staged before it in the same unit, and nothing becomes
/// visible to other units until [`super::UnitOfWork::save`] commits.
///
/// Any failed statement aborts the whole unit: later operations are refused
/// and `save` reports the failure instead of committing.
pub struct Repository<'u, E: Entity> {
    session: &'u mut Session,
    _entity: PhantomData<fn() -> E>,
}

impl<'u, E: Entity> Repository<'u, E> {
    pub(crate) fn new(session: &'u mut Session) -> Self {
        Self {
            session,
            _entity: PhantomData,
        }
    }

    /// Returns every entity of this kind ordered by identity.
    pub async fn get_all(&mut self, include: &[E::Relation]) -> Result<Vec<E>, AppError> {
        self.session.ensure_open()?;

        let mut qb = select::<E>();
        qb.push(" ORDER BY id");

        let result = qb.build_query_as::<E>().fetch_all(self.session.conn()).await;
        let mut items = self.session.track(result)?;

        self.load(&mut items, include).await?;
        Ok(items)
    }

    /// Returns one page ordered by identity together with the total count.
    ///
    /// Paging is done by the database with `LIMIT`/`OFFSET`.
    pub async fn get_paged_list(
        &mut self,
        page: PageRequest,
        include: &[E::Relation],
    ) -> Result<Page<E>, AppError> {
        self.session.ensure_open()?;

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM ");
        count.push(E::TABLE);
        let result = count
            .build_query_scalar::<i64>()
            .fetch_one(self.session.conn())
            .await;
        let total_items = self.session.track(result)?;

        let mut qb = select::<E>();
        qb.push(" ORDER BY id LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let result = qb.build_query_as::<E>().fetch_all(self.session.conn()).await;
        let mut items = self.session.track(result)?;

        self.load(&mut items, include).await?;

        Ok(Page {
            items,
            page_number: page.page_number(),
            page_size: page.page_size(),
            total_items,
        })
    }

    /// Returns the first entity matching `query`, or `None`.
    pub async fn get(
        &mut self,
        query: &E::Query,
        include: &[E::Relation],
    ) -> Result<Option<E>, AppError> {
        self.session.ensure_open()?;

        let mut qb = select::<E>();
        E::push_filter(query, &mut qb);
        qb.push(" ORDER BY id LIMIT 1");

        let result = qb
            .build_query_as::<E>()
            .fetch_optional(self.session.conn())
            .await;
        let Some(entity) = self.session.track(result)? else {
            return Ok(None);
        };

        let mut items = [entity];
        self.load(&mut items, include).await?;
        let [entity] = items;
        Ok(Some(entity))
    }

    /// Stages a new entity and returns it with its store-assigned identity.
    pub async fn insert(&mut self, new: E::New) -> Result<E, AppError> {
        self.session.ensure_open()?;

        let mut qb = QueryBuilder::<Postgres>::new("INSERT INTO ");
        qb.push(E::TABLE)
            .push(" (")
            .push(E::INSERT_COLUMNS)
            .push(") VALUES (");
        {
            let mut values = qb.separated(", ");
            E::push_insert_values(&new, &mut values);
        }
        qb.push(") RETURNING ").push(E::COLUMNS);

        let result = qb.build_query_as::<E>().fetch_one(self.session.conn()).await;
        let created = self.session.track(result)?;

        tracing::debug!(table = E::TABLE, id = created.id(), "Staged insert");
        Ok(created)
    }

    /// Stages an update of every mutable column of the row with `entity`'s identity.
    pub async fn update(&mut self, entity: &E) -> Result<(), AppError> {
        self.session.ensure_open()?;

        let mut qb = QueryBuilder::<Postgres>::new("UPDATE ");
        qb.push(E::TABLE).push(" SET ");
        {
            let mut set = qb.separated(", ");
            entity.push_assignments(&mut set);
        }
        qb.push(" WHERE id = ").push_bind(entity.id());

        let result = qb.build().execute(self.session.conn()).await;
        self.session.track(result)?;

        tracing::debug!(table = E::TABLE, id = entity.id(), "Staged update");
        Ok(())
    }

    /// Stages removal of the row with identity `id`.
    ///
    /// Callers check existence first; a missing row is not reported here.
    pub async fn delete(&mut self, id: i64) -> Result<(), AppError> {
        self.session.ensure_open()?;

        let mut qb = QueryBuilder::<Postgres>::new("DELETE FROM ");
        qb.push(E::TABLE).push(" WHERE id = ").push_bind(id);

        let result = qb.build().execute(self.session.conn()).await;
        self.session.track(result)?;

        tracing::debug!(table = E::TABLE, id, "Staged delete");
        Ok(())
    }

    async fn load(&mut self, items: &mut [E], include: &[E::Relation]) -> Result<(), AppError> {
        if include.is_empty() {
            return Ok(());
        }
        let result = E::load_relations(items, include, self.session.conn()).await;
        self.session.track(result)
    }
}

fn select<E: Entity>() -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("SELECT ");
    qb.push(E::COLUMNS).push(" FROM ").push(E::TABLE);
    qb
}
