//! Customer review carousel.
//!
//! [`Carousel`] is a pure state machine over page offsets. [`AutoAdvanceTimer`]
//! is the single timer handle its owner recreates whenever the machine asks.

mod controller;
mod timer;

pub use controller::{AutoAdvance, Carousel, CarouselConfig, TimerCommand};
pub use timer::{AutoAdvanceTimer, Tick};
