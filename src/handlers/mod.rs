// src/handlers/mod.rs

pub mod blogs;
pub mod comments;
pub mod projects;
pub mod submissions;
