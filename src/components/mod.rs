pub mod nav_bar;
pub mod wallet_connection;

pub use nav_bar::NavBar;
