pub mod reflect_interface;
pub mod reflect_model;
