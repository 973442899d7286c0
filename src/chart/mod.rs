pub mod series;
pub mod spec;
