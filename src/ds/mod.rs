pub mod recent_window;

pub use recent_window::RecentWindow;
