pub mod embed;
pub mod files;
pub mod storage;
