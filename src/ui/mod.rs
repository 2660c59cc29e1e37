//! UI module for egui-based user interface.

pub mod screens;
