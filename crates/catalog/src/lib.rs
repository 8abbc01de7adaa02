mod alcohol;
mod category;
mod frozen;
mod produce;
mod repository;

pub use alcohol::*;
pub use category::*;
pub use frozen::*;
pub use produce::*;
pub use repository::*;
