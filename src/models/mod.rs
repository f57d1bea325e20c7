pub mod health;
pub mod ready;
pub mod images;
pub mod error;

pub use health::*;
pub use ready::*;
pub use images::*;
pub use error::*;
