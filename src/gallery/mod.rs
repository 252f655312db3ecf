pub mod animation;
pub mod card_layout;
pub mod edge;
pub mod gallery_view;
pub mod sections;
pub mod timeline;
pub mod transition;
pub mod viewport;
