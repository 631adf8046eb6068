// src/repo/mod.rs
//
// Repository functions. All storage access goes through these, with the pool
// handle passed explicitly; handlers never build SQL themselves.

pub mod blogs;
pub mod comments;
pub mod projects;
pub mod submissions;
