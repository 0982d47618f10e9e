pub mod error;
pub mod fetch;
pub mod format;
pub mod generation;
pub mod platform;
pub mod storage;
pub mod timing;
