pub mod buffer;
pub mod delta;
pub mod display;
pub mod graph;
