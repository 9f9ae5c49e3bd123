pub mod airports;
pub mod destinations;
pub mod partners;
