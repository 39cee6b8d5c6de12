/*! Offline corpus processing

Operations on record streams that happen before alignment.
!*/
pub mod group;

pub use group::{take_first_n_groups, Group};
