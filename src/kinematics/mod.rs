pub mod description;
pub mod link;
pub mod transforms;

pub use description::*;
pub use link::*;
pub use transforms::*;
