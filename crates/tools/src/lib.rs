pub mod lines;

pub use crate::lines::LineSplitter;
