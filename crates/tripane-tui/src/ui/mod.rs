pub mod breadcrumb;
pub mod panel;
pub mod popup;
pub mod preview;
pub mod statusbar;
