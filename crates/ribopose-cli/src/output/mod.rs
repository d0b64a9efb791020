pub mod pdb;
pub mod stats;
