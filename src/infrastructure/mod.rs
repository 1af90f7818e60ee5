pub mod knowledge;
pub mod observability;
