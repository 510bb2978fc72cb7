pub use crate::common::time::{Clock, FixedClock, SystemClock, time_of_day};
