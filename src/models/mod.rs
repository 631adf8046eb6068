// src/models/mod.rs

pub mod blog;
pub mod comment;
pub mod project;
pub mod submission;
