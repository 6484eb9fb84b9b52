/// Order side and position direction enums
pub mod order;
