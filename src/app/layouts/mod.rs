pub mod dashboard_layout;
pub mod header;
pub mod mobile_menu;
pub mod sidebar;

pub use dashboard_layout::DashboardLayout;
pub use header::Header;
pub use mobile_menu::MobileMenu;
pub use sidebar::Sidebar;
