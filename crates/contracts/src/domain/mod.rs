pub mod a001_catalog;
pub mod common;
