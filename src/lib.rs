pub mod announcer;
pub mod constants;
pub mod controller;
pub mod deck;
pub mod slide;
pub mod state;
pub mod swipe;
pub mod theme;
pub mod timer;
pub mod ui;
