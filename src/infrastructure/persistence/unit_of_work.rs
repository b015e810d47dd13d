//! Unit of work: one transaction, one repository per entity kind, one commit.

use serde_json::json;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use super::repository::Repository;
use crate::domain::entities::{Country, Hotel};
use crate::error::AppError;

/// Transaction state shared by the repositories of one unit of work.
pub(crate) struct Session {
    tx: Transaction<'static, Postgres>,
    aborted: bool,
}

impl Session {
    pub(crate) fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub(crate) fn ensure_open(&self) -> Result<(), AppError> {
        if self.aborted {
            return Err(aborted_error());
        }
        Ok(())
    }

    /// Converts a store result, marking the unit aborted on failure.
    pub(crate) fn track<T>(&mut self, result: Result<T, sqlx::Error>) -> Result<T, AppError> {
        result.map_err(|e| {
            self.aborted = true;
            tracing::warn!(error = %e, "Statement failed, unit of work aborted");
            AppError::from(e)
        })
    }
}

fn aborted_error() -> AppError {
    AppError::internal(
        "Unit of work aborted by an earlier failure; no changes were saved",
        json!({}),
    )
}

/// A request-scoped transaction boundary over the country and hotel repositories.
///
/// The unit owns exactly one pooled connection until it is saved, discarded
/// or dropped. Repositories borrow it mutably, so it cannot be shared across
/// concurrent tasks, and because [`UnitOfWork::save`] and
/// [`UnitOfWork::discard`] consume it, no repository can be used afterwards.
///
/// Dropping an unsaved unit rolls every staged change back.
///
/// ```rust,ignore
/// let mut uow = UnitOfWork::begin(&pool).await?;
/// let kenya = uow
///     .countries()
///     .insert(NewCountry { name: "Kenya".into(), short_name: "KE".into() })
///     .await?;
/// uow.save().await?;
/// ```
pub struct UnitOfWork {
    session: Session,
}

impl UnitOfWork {
    /// Acquires a connection and opens a transaction on it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the pool cannot provide a connection.
    pub async fn begin(pool: &PgPool) -> Result<Self, AppError> {
        let tx = pool.begin().await?;

        Ok(Self {
            session: Session { tx, aborted: false },
        })
    }

    pub fn countries(&mut self) -> Repository<'_, Country> {
        Repository::new(&mut self.session)
    }

    pub fn hotels(&mut self) -> Repository<'_, Hotel> {
        Repository::new(&mut self.session)
    }

    /// Whether a staged operation has failed.
    pub fn is_aborted(&self) -> bool {
        self.session.aborted
    }

    /// Commits every staged change atomically.
    ///
    /// # Errors
    ///
    /// If any staged operation failed, the transaction is rolled back and
    /// [`AppError::Internal`] is returned. Commit failures are converted the
    /// same way as statement failures.
    pub async fn save(self) -> Result<(), AppError> {
        let Session { tx, aborted } = self.session;

        if aborted {
            tx.rollback().await?;
            tracing::warn!("Rolled back aborted unit of work");
            return Err(aborted_error());
        }

        tx.commit().await?;
        tracing::debug!("Unit of work committed");
        Ok(())
    }

    /// Rolls back every staged change and releases the connection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the rollback itself fails.
    pub async fn discard(self) -> Result<(), AppError> {
        self.session.tx.rollback().await?;
        Ok(())
    }
}
