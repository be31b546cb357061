pub mod hours;
pub mod overtime;

pub use hours::round2;
