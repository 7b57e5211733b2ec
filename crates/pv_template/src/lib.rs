mod escape;
mod tag;

pub use escape::*;
pub use tag::*;
