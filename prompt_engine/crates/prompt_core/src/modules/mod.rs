pub mod catalog;
pub mod composer;
pub mod error;
pub mod field_resolver;
pub mod protocol;
pub mod randomizer;
pub mod session;
