//! Time of day to Berlin Uhr lamp conversion.
//!
//! ```
//! use berlinuhr::clock::convert;
//!
//! let lamps = convert("17:49:21").unwrap();
//! assert_eq!(lamps.five_hours, [1, 1, 1, 0]);
//! assert_eq!(lamps.one_minutes, [1, 1, 1, 1]);
//! ```

pub use crate::features::convert::{
    ClockError, Component, LampState, Row, TimeInput, TimeOfDay, convert,
};
