pub mod cli;
pub mod logging;
pub mod models;
pub mod parser;
pub mod repl;
pub mod storage;
