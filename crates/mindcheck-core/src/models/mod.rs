pub mod assessment;
pub mod result;
pub mod severity;
pub mod summary;
