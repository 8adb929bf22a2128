mod menu_icon;
mod mobile_nav;
mod nav_sidebar;
mod profile;

pub use menu_icon::MenuIconView;
pub use mobile_nav::MobileNav;
pub use nav_sidebar::NavSidebar;
pub use profile::UserProfile;
