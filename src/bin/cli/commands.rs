pub mod item;
pub mod scenario;
pub mod seller;
