pub mod luno;
pub mod luno_use_cases;
pub mod use_cases;
