pub mod not_found;
pub mod wheel_page;
