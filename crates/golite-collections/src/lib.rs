//! golite-collections - Small generic collections shared by golite stages
//!
//! Currently this is a LIFO [`Stack`], the structure a parser or checker
//! uses for nested scopes, pending operators and the like.

pub mod stack;

pub use stack::Stack;
