//! Reservations Module
//!
//! Booking of hourly slots in the shared space.
//!
//! # Architecture
//!
//! - **`clock`** - Injected wall clock (`Clock`, `SystemClock`, `FixedClock`)
//! - **`week`** - Monday..Friday window computation
//! - **`ledger`** - `ReservationLedger` storage seam and its Postgres implementation
//! - **`engine`** - Booking rules: double-booking, past slots, ownership
//! - **`handlers`** - HTTP handlers for planning and reservation endpoints
//!
//! # Module Structure
//!
//! ```text
//! reservations/
//! ├── mod.rs       - Module exports and documentation
//! ├── clock.rs     - Clock capability
//! ├── week.rs      - Week window
//! ├── ledger.rs    - Storage seam
//! ├── engine.rs    - Booking rules
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod clock;
pub mod week;
pub mod ledger;
pub mod engine;
pub mod handlers;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{ReservationDraft, ReservationEngine, ReservationError, SlotPolicy};
pub use ledger::{NewReservation, PgReservationLedger, ReservationLedger};
pub use week::WeekWindow;
