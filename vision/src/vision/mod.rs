pub mod classifier;
pub mod proposals;
pub mod stabilizer;
