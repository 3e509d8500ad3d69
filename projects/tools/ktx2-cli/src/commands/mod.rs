pub mod info;
pub mod stubs;
pub mod validate;
