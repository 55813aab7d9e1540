pub mod algorithm;
pub mod blastinput;
pub mod common;
pub mod config;
pub mod post;
pub mod report;
