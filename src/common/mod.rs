pub mod lamps;
pub mod time;
