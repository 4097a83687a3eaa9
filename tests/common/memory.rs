//! In-memory storage doubles
//!
//! Both stores enforce the same uniqueness rules as the Postgres schema
//! (one reservation per slot, one account per email) so the engine's
//! conflict paths behave as they do in production.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use techspace::backend::auth::{NewUser, User, UserStore};
use techspace::backend::error::StorageError;
use techspace::backend::reservations::{NewReservation, ReservationLedger};
use techspace::shared::Reservation;

/// Reservation ledger kept in a vector
///
/// Listings come back in insertion order, unsorted.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    rows: Mutex<Vec<Reservation>>,
}

impl MemoryLedger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert a row directly, bypassing the engine (e.g. a slot already in the past)
    pub async fn seed(&self, reservation: Reservation) {
        self.rows.lock().await.push(reservation);
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }
}

#[async_trait]
impl ReservationLedger for MemoryLedger {
    async fn insert(&self, reservation: NewReservation) -> Result<Reservation, StorageError> {
        let mut rows = self.rows.lock().await;
        if rows
            .iter()
            .any(|r| r.date == reservation.date && r.start_time == reservation.start_time)
        {
            return Err(StorageError::unique_violation("reservations_slot_key"));
        }
        let stored = Reservation {
            id: Uuid::new_v4(),
            date: reservation.date,
            start_time: reservation.start_time,
            end_time: reservation.end_time,
            user_id: reservation.user_id,
            user_name: reservation.user_name,
            object: reservation.object,
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, StorageError> {
        Ok(self.rows.lock().await.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_slot(
        &self,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> Result<Option<Reservation>, StorageError> {
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .find(|r| r.date == date && r.start_time == start_time)
            .cloned())
    }

    async fn update_object(
        &self,
        id: Uuid,
        object: &str,
    ) -> Result<Option<Reservation>, StorageError> {
        let mut rows = self.rows.lock().await;
        Ok(rows.iter_mut().find(|r| r.id == id).map(|r| {
            r.object = object.to_string();
            r.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() != before)
    }

    async fn list_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Reservation>, StorageError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|r| r.date >= from && r.date <= to)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Reservation>, StorageError> {
        Ok(self.rows.lock().await.clone())
    }
}

/// User store kept in a vector
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Drop an account, leaving any token issued for it valid
    pub async fn remove(&self, id: Uuid) {
        self.users.lock().await.retain(|u| u.id != id);
    }

    pub async fn password_hash(&self, email: &str) -> Option<String> {
        self.users
            .lock()
            .await
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.password_hash.clone())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: NewUser) -> Result<User, StorageError> {
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StorageError::unique_violation("users_email_key"));
        }
        let stored = User {
            id: Uuid::new_v4(),
            nom: user.nom,
            prenom: user.prenom,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        Ok(self.users.lock().await.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StorageError> {
        Ok(self.users.lock().await.iter().find(|u| u.id == id).cloned())
    }
}
