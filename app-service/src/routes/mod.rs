pub(crate) mod index;
pub(crate) mod protected;

// re-export items from sub-modules
pub use index::*;
pub use protected::*;
