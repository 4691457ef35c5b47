pub mod bounding_box;
pub mod contours;
pub mod filter;
