pub mod app;
pub mod input;
pub mod scramble;
pub mod ui;
