pub mod error;
pub mod graph_index;
pub mod result;
pub mod visitor;

pub use error::*;
pub use graph_index::*;
pub use result::*;
pub use visitor::*;
