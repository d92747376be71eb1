pub mod persistence;
pub mod queue;
pub mod storage;
