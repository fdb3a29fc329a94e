pub mod irrigation;
pub mod tables;

pub use irrigation::{calculate_irrigation, IrrigationInput};
