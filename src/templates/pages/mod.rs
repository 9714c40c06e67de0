pub mod about;
pub mod drive;
pub mod home;

pub use about::about_page;
pub use drive::drive_page;
pub use home::home_page;
