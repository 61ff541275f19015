pub mod actions;
pub mod animator;
pub mod catalog;
pub mod data;
pub mod exhibit_kinds;
pub mod flocking;
pub mod lifecycle;
pub mod ports;
pub mod puzzle;
pub mod sorting;
pub mod timing;
