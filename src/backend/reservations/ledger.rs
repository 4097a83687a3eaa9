/**
 * Reservation Ledger
 *
 * The ledger is the persistent store of reservation records. The booking
 * rules in `engine.rs` talk to it only through [`ReservationLedger`], so
 * they stay independent of storage mechanics.
 *
 * # Storage Guarantees
 *
 * The Postgres table carries a `UNIQUE (date, start_time)` constraint. The
 * engine checks for an existing booking before inserting, but two
 * concurrent requests can both pass that check; the constraint rejects the
 * second insert, which surfaces as `StorageError::UniqueViolation`.
 */

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::StorageError;
use crate::shared::Reservation;

/// Reservation ready to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub user_id: Uuid,
    pub user_name: String,
    pub object: String,
}

/// Persistent store of reservations
///
/// Listing methods return records ordered by date, then start time.
#[async_trait]
pub trait ReservationLedger: Send + Sync {
    /// Persist a new reservation, assigning its id
    async fn insert(&self, reservation: NewReservation) -> Result<Reservation, StorageError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, StorageError>;

    /// Reservation occupying the exact `(date, start_time)` slot, if any
    async fn find_by_slot(
        &self,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> Result<Option<Reservation>, StorageError>;

    /// Replace the object of a reservation; `None` if it no longer exists
    async fn update_object(
        &self,
        id: Uuid,
        object: &str,
    ) -> Result<Option<Reservation>, StorageError>;

    /// Delete a reservation; `false` if it did not exist
    async fn delete(&self, id: Uuid) -> Result<bool, StorageError>;

    /// Reservations dated within `[from, to]`
    async fn list_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Reservation>, StorageError>;

    async fn list_all(&self) -> Result<Vec<Reservation>, StorageError>;
}

/// Row of the `reservations` table
#[derive(Debug, sqlx::FromRow)]
struct ReservationRow {
    id: Uuid,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    user_id: Uuid,
    user_name: String,
    title: String,
}

impl From<ReservationRow> for Reservation {
    fn from(row: ReservationRow) -> Self {
        Reservation {
            id: row.id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            user_id: row.user_id,
            user_name: row.user_name,
            object: row.title,
        }
    }
}

/// Postgres-backed ledger
#[derive(Debug, Clone)]
pub struct PgReservationLedger {
    pool: PgPool,
}

impl PgReservationLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationLedger for PgReservationLedger {
    async fn insert(&self, reservation: NewReservation) -> Result<Reservation, StorageError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            INSERT INTO reservations (id, date, start_time, end_time, user_id, user_name, title)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, date, start_time, end_time, user_id, user_name, title
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(reservation.date)
        .bind(reservation.start_time)
        .bind(reservation.end_time)
        .bind(reservation.user_id)
        .bind(&reservation.user_name)
        .bind(&reservation.object)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, StorageError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT id, date, start_time, end_time, user_id, user_name, title
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Reservation::from))
    }

    async fn find_by_slot(
        &self,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> Result<Option<Reservation>, StorageError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT id, date, start_time, end_time, user_id, user_name, title
            FROM reservations
            WHERE date = $1 AND start_time = $2
            "#,
        )
        .bind(date)
        .bind(start_time)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Reservation::from))
    }

    async fn update_object(
        &self,
        id: Uuid,
        object: &str,
    ) -> Result<Option<Reservation>, StorageError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            UPDATE reservations
            SET title = $1
            WHERE id = $2
            RETURNING id, date, start_time, end_time, user_id, user_name, title
            "#,
        )
        .bind(object)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Reservation::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Reservation>, StorageError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT id, date, start_time, end_time, user_id, user_name, title
            FROM reservations
            WHERE date BETWEEN $1 AND $2
            ORDER BY date ASC, start_time ASC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<Reservation>, StorageError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT id, date, start_time, end_time, user_id, user_name, title
            FROM reservations
            ORDER BY date ASC, start_time ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }
}
