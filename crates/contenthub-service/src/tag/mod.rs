//! Tag index services.

pub mod accumulator;
pub mod service;

pub use accumulator::TagAccumulator;
pub use service::TagService;
