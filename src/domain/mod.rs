pub mod clock;
pub mod weather;
