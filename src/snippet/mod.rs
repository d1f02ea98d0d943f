pub mod generator;
pub mod snippet_model;
