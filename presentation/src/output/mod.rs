//! Console output: formatting render nodes and applying them to the terminal

pub mod console;
pub mod view;
