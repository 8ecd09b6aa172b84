pub mod console;
pub mod menu;
pub mod roster;
pub mod service;
pub mod session;
