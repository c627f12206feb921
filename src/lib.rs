pub mod config;
pub mod grades;
pub mod output;
pub mod parser;
