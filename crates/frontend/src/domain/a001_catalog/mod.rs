pub mod controller;
pub mod model;
pub mod ui;
pub mod view_model;
