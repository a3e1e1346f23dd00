//! Building a starting eleven from an external player pool

mod selector;

pub use selector::{select_starting_eleven, LINEUP_SIZE};
