mod authority;

pub use authority::*;
