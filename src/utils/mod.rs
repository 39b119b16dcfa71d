pub mod navigation;
pub mod sequence;
pub mod storage;
