//! `PostgreSQL` store implementation for contact messages.

use super::{
    models::{ContactMessageRow, NewContactMessageRow},
    schema::contact_messages,
};
use crate::contact::{
    domain::{ContactMessage, ContactMessageId, NewContactMessage, PersistedContactMessage},
    error::StoreError,
    ports::store::{ContactMessageStore, StoreResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;

/// SQL that creates the contact message table if it is missing.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-01-000000_create_contact_messages/up.sql");

/// `PostgreSQL` connection pool type used by the contact store.
pub type ContactPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed contact message store.
///
/// Each `create` is a single `INSERT`, so a record is either fully written or
/// absent. Listing order follows the table's `position` sequence.
pub struct PostgresContactStore<C = DefaultClock> {
    pool: ContactPgPool,
    clock: Arc<C>,
}

impl<C> Clone for PostgresContactStore<C> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> std::fmt::Debug for PostgresContactStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.pool.state();
        f.debug_struct("PostgresContactStore")
            .field("connections", &state.connections)
            .field("idle_connections", &state.idle_connections)
            .finish_non_exhaustive()
    }
}

impl PostgresContactStore<DefaultClock> {
    /// Creates a store from a connection pool, stamped by the system clock.
    #[must_use]
    pub fn new(pool: ContactPgPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }

    /// Builds a pool for `database_url` and returns a store over it.
    ///
    /// Pool construction opens connections, so it runs on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the pool cannot be built.
    pub async fn connect(database_url: &str, max_size: u32) -> StoreResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = tokio::task::spawn_blocking(move || {
            Pool::builder().max_size(max_size).build(manager)
        })
        .await
        .map_err(StoreError::storage)?
        .map_err(|err| StoreError::connection(err.to_string()))?;
        Ok(Self::new(pool))
    }
}

impl<C> PostgresContactStore<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates a store from a connection pool and clock.
    #[must_use]
    pub const fn with_clock(pool: ContactPgPool, clock: Arc<C>) -> Self {
        Self { pool, clock }
    }

    /// Creates the contact message table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the statement fails.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        self.run_blocking(|connection| {
            connection.batch_execute(CREATE_SCHEMA_SQL)?;
            Ok(())
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| StoreError::connection(err.to_string()))?;
            f(&mut connection)
        })
        .await
        .map_err(StoreError::storage)?
    }
}

#[async_trait]
impl<C> ContactMessageStore for PostgresContactStore<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn create(&self, payload: NewContactMessage) -> StoreResult<ContactMessage> {
        let message = ContactMessage::new(payload, self.clock.as_ref());
        let new_row = to_new_row(&message);

        self.run_blocking(move |connection| {
            diesel::insert_into(contact_messages::table)
                .values(&new_row)
                .execute(connection)?;
            Ok(())
        })
        .await?;

        Ok(message)
    }

    async fn list(&self) -> StoreResult<Vec<ContactMessage>> {
        self.run_blocking(|connection| {
            let rows = contact_messages::table
                .order(contact_messages::position.asc())
                .select(ContactMessageRow::as_select())
                .load::<ContactMessageRow>(connection)?;
            Ok(rows.into_iter().map(row_to_message).collect())
        })
        .await
    }
}

fn to_new_row(message: &ContactMessage) -> NewContactMessageRow {
    NewContactMessageRow {
        id: message.id().into_inner(),
        name: message.name().to_owned(),
        email: message.email().to_owned(),
        message: message.message().to_owned(),
        created_at: message.created_at(),
    }
}

fn row_to_message(row: ContactMessageRow) -> ContactMessage {
    let ContactMessageRow {
        id,
        name,
        email,
        message,
        created_at,
    } = row;

    ContactMessage::from_persisted(PersistedContactMessage {
        id: ContactMessageId::from_uuid(id),
        name,
        email,
        message,
        created_at,
    })
}
