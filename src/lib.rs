pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod keybindings;
pub mod payment;
pub mod planner;
pub mod preferences;
pub mod storage;
pub mod store;
pub mod task;
pub mod theme;
pub mod ui;
pub mod util;
pub mod views;
