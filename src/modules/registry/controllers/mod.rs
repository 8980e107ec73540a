pub mod repository_controller;

pub use repository_controller::configure;
