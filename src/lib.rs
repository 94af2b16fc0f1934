#[macro_use]
extern crate derive_more;

pub mod app;
pub mod basic;
pub mod control;
pub mod error;
pub mod keyboard_layout;
pub mod prefs;
pub mod rendering;
pub mod shape;
