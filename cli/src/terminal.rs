pub mod chart;
pub mod colors;
pub mod logging;
pub mod print;
pub mod table;
