pub mod health;
pub mod images;

pub use health::*;
pub use images::*;
