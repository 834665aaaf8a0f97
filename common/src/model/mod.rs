pub mod attachment;
pub mod config;
pub mod governorate;
pub mod member;
