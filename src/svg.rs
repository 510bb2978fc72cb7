pub use crate::features::svg::{height_for, render};
