pub mod token_verifier;

pub use token_verifier::*;
