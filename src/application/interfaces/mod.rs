/// Trading service interface
pub mod trading;
