pub mod problems;
pub mod run;
