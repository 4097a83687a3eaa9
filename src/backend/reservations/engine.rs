/**
 * Reservation Engine
 *
 * The booking rules. Every mutation of the ledger goes through
 * [`ReservationEngine`], which decides whether it is admissible before any
 * write happens.
 *
 * # Rules
 *
 * Creating a reservation, first failing check wins:
 * 1. `date`, `hour` and `object` are present (`object` not blank)
 * 2. the slot lies within opening hours
 * 3. the slot does not start before now
 * 4. no reservation holds the same `(date, start_time)`
 *
 * Updating (object only): the reservation exists, the new object is not
 * blank, the caller owns it, and it has not started yet.
 *
 * Cancelling: the reservation exists and the caller owns it. Past
 * reservations may be cancelled.
 */
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::error::StorageError;
use crate::backend::reservations::clock::Clock;
use crate::backend::reservations::ledger::{NewReservation, ReservationLedger};
use crate::backend::reservations::week::WeekWindow;
use crate::shared::config::{AppConfig, DEFAULT_CLOSING_HOUR, DEFAULT_OPENING_HOUR};
use crate::shared::{Identity, Reservation};

/// Rejection of a reservation request
#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("slot {start} is outside opening hours ({opening}h-{closing}h)")]
    OutsideOpeningHours {
        start: NaiveTime,
        opening: u32,
        closing: u32,
    },

    /// Reference date too close to the calendar limits to have a week
    #[error("date {0} is out of range")]
    DateOutOfRange(NaiveDate),

    #[error("slot {0} is in the past")]
    SlotInPast(NaiveDateTime),

    #[error("slot {date} {start} is already taken")]
    SlotTaken { date: NaiveDate, start: NaiveTime },

    #[error("reservation {0} not found")]
    NotFound(Uuid),

    #[error("reservation {0} belongs to another user")]
    NotOwner(Uuid),

    #[error("reservation {0} has already started and can no longer be modified")]
    PastReservation(Uuid),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Which hours may be booked, and how long a slot lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPolicy {
    opening_hour: u32,
    closing_hour: u32,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            opening_hour: DEFAULT_OPENING_HOUR,
            closing_hour: DEFAULT_CLOSING_HOUR,
        }
    }
}

impl SlotPolicy {
    /// One slot lasts an hour
    pub const SLOT_LENGTH: TimeDelta = TimeDelta::hours(1);

    pub fn new(opening_hour: u32, closing_hour: u32) -> Self {
        Self {
            opening_hour,
            closing_hour,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.opening_hour, config.closing_hour)
    }

    /// Check a start time against opening hours and derive its end time
    pub fn admit(&self, start: NaiveTime) -> Result<NaiveTime, ReservationError> {
        let outside = ReservationError::OutsideOpeningHours {
            start,
            opening: self.opening_hour,
            closing: self.closing_hour,
        };
        let hour = start.hour();
        if hour < self.opening_hour || hour + 1 > self.closing_hour {
            return Err(outside);
        }
        // A slot never runs past midnight
        match start.overflowing_add_signed(Self::SLOT_LENGTH) {
            (end, 0) => Ok(end),
            _ => Err(outside),
        }
    }
}

/// Parsed booking request; fields are `None` when the client omitted them
#[derive(Debug, Clone, Default)]
pub struct ReservationDraft {
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub object: Option<String>,
}

/// Booking rules over a [`ReservationLedger`]
#[derive(Clone)]
pub struct ReservationEngine {
    ledger: Arc<dyn ReservationLedger>,
    clock: Arc<dyn Clock>,
    policy: SlotPolicy,
}

impl ReservationEngine {
    pub fn new(ledger: Arc<dyn ReservationLedger>, clock: Arc<dyn Clock>, policy: SlotPolicy) -> Self {
        Self {
            ledger,
            clock,
            policy,
        }
    }

    /// Book a slot for `requester`
    ///
    /// # Errors
    ///
    /// * `MissingField` - `date`, `hour` or `object` absent
    /// * `OutsideOpeningHours` - slot outside the bookable window
    /// * `SlotInPast` - slot starts before now
    /// * `SlotTaken` - another reservation holds the slot
    pub async fn create(
        &self,
        draft: ReservationDraft,
        requester: &Identity,
    ) -> Result<Reservation, ReservationError> {
        let date = draft.date.ok_or(ReservationError::MissingField("date"))?;
        let start_time = draft.start_time.ok_or(ReservationError::MissingField("hour"))?;
        let object = non_blank(draft.object).ok_or(ReservationError::MissingField("object"))?;

        let end_time = self.policy.admit(start_time)?;

        let starts_at = date.and_time(start_time);
        if starts_at < self.clock.now() {
            return Err(ReservationError::SlotInPast(starts_at));
        }

        let taken = ReservationError::SlotTaken {
            date,
            start: start_time,
        };
        if self.ledger.find_by_slot(date, start_time).await?.is_some() {
            return Err(taken);
        }

        let new_reservation = NewReservation {
            date,
            start_time,
            end_time,
            user_id: requester.id,
            user_name: requester.display_name(),
            object,
        };

        match self.ledger.insert(new_reservation).await {
            Ok(reservation) => {
                tracing::info!(
                    "Reservation {} created for {} {} by {}",
                    reservation.id,
                    reservation.date,
                    reservation.start_time.format("%H:%M"),
                    requester.id
                );
                Ok(reservation)
            }
            // Lost the race between the slot check and the insert
            Err(err) if err.is_unique_violation() => Err(taken),
            Err(err) => Err(err.into()),
        }
    }

    /// Change the object of a reservation owned by `requester`
    pub async fn update(
        &self,
        id: Uuid,
        new_object: Option<String>,
        requester: &Identity,
    ) -> Result<Reservation, ReservationError> {
        let existing = self
            .ledger
            .find_by_id(id)
            .await?
            .ok_or(ReservationError::NotFound(id))?;

        let object = non_blank(new_object).ok_or(ReservationError::MissingField("object"))?;

        if existing.user_id != requester.id {
            return Err(ReservationError::NotOwner(id));
        }

        if existing.starts_at() < self.clock.now() {
            return Err(ReservationError::PastReservation(id));
        }

        let updated = self
            .ledger
            .update_object(id, &object)
            .await?
            .ok_or(ReservationError::NotFound(id))?;

        tracing::info!("Reservation {} updated by {}", id, requester.id);
        Ok(updated)
    }

    /// Delete a reservation owned by `requester`
    pub async fn cancel(&self, id: Uuid, requester: &Identity) -> Result<(), ReservationError> {
        let existing = self
            .ledger
            .find_by_id(id)
            .await?
            .ok_or(ReservationError::NotFound(id))?;

        if existing.user_id != requester.id {
            return Err(ReservationError::NotOwner(id));
        }

        if !self.ledger.delete(id).await? {
            return Err(ReservationError::NotFound(id));
        }

        tracing::info!("Reservation {} cancelled by {}", id, requester.id);
        Ok(())
    }

    /// Reservations from Monday to Friday of the week containing `reference`
    pub async fn list_week(&self, reference: NaiveDate) -> Result<Vec<Reservation>, ReservationError> {
        let window =
            WeekWindow::containing(reference).ok_or(ReservationError::DateOutOfRange(reference))?;
        let mut reservations = self.ledger.list_between(window.monday, window.friday).await?;
        sort_by_slot(&mut reservations);
        Ok(reservations)
    }

    /// Every reservation
    pub async fn list_all(&self) -> Result<Vec<Reservation>, ReservationError> {
        let mut reservations = self.ledger.list_all().await?;
        sort_by_slot(&mut reservations);
        Ok(reservations)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn sort_by_slot(reservations: &mut [Reservation]) {
    reservations.sort_by_key(|r| (r.date, r.start_time));
}
