pub mod course;
pub mod price;
