pub mod button;
pub mod nav_list;
pub mod notification_bell;
pub mod page;
pub mod search_box;
pub mod theme_toggle;
pub mod user_badge;

pub use button::IconButton;
pub use nav_list::{NavList, NavRowLink, NavVariant};
pub use notification_bell::NotificationBell;
pub use page::PlaceholderPage;
pub use search_box::SearchBox;
pub use theme_toggle::ThemeToggle;
pub use user_badge::UserBadge;
