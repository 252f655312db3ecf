pub mod scroll_trigger;
pub mod smooth_scroll;
