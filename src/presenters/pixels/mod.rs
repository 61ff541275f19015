pub mod factory;
pub mod presenter;
