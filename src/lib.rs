pub mod lines;
pub mod symlib;
