mod config;
mod error;
mod option;
mod select_list;

pub use config::*;
pub use error::*;
pub use option::*;
pub use select_list::*;
