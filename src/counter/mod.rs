mod count;
mod tally;

pub use count::{CountError, count};
pub use tally::Tally;
