pub mod entity;
pub mod event;
pub mod service;
pub mod value_object;
