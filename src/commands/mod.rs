pub mod agenda;
pub mod day;
pub mod demo;
pub mod week;
