pub mod compute;
pub mod constants;
pub mod display;
pub mod entities;
pub mod geometry;
pub mod level;
