pub mod library;
pub mod source;
pub mod storage;
