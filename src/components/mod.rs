mod icon;
mod mobile_drawer;
mod nav_bar;
mod nav_item;

pub use icon::Icon;
pub use mobile_drawer::MobileDrawer;
pub use nav_bar::NavBar;
pub use nav_item::NavItem;
