#![warn(clippy::all, rust_2018_idioms)]

//! egui front end of the roster client: the employee list widget and the
//! eframe app hosting it.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::RosterApp;
