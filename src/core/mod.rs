pub mod aim;
pub mod ballistics;
pub mod flight;
pub mod motion;
pub mod window;
