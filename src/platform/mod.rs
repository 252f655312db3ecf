pub mod renderer;
pub mod renderer_cairo;
pub mod surface;
pub mod window_x11;
