pub mod engine;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
