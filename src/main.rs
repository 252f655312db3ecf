mod core;
mod gallery;
mod platform;
mod scroll;

use crate::core::app::GalleryApp;
use crate::core::config::{self, GalleryConfig};
use crate::core::error::{GalleryError, Result};
use crate::gallery::gallery_view::GalleryView;
use crate::platform::renderer::Renderer;
use crate::platform::renderer_cairo::RendererCairo;
use crate::platform::window_x11::WindowX11;
use crate::scroll::smooth_scroll::{SmoothScroll, SmoothScrollOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

const USAGE: &str = "Usage: card-gallery [--assets <dir>] [--cards <n>] [--seed <n>] \
                     [--width <px>] [--height <px>] [--lerp <0..1>]";

fn parse_value<T: FromStr>(flag: &str, value: Option<&String>) -> Result<T> {
    let value = value.ok_or_else(|| GalleryError::InvalidArgument {
        flag: flag.to_string(),
        value: String::new(),
    })?;
    value.parse().map_err(|_| GalleryError::InvalidArgument {
        flag: flag.to_string(),
        value: value.clone(),
    })
}

fn parse_args(argv: &[String]) -> Result<GalleryConfig> {
    let mut cfg = GalleryConfig::default();

    let mut i = 1;
    while i < argv.len() {
        let flag = argv[i].as_str();
        let value = argv.get(i + 1);
        match flag {
            "--assets" => {
                cfg.asset_root = PathBuf::from(parse_value::<String>(flag, value)?);
                i += 1;
            }
            "--cards" => {
                cfg.cards_per_section = parse_value(flag, value)?;
                i += 1;
            }
            "--seed" => {
                cfg.seed = Some(parse_value(flag, value)?);
                i += 1;
            }
            "--width" => {
                cfg.window_width = parse_value(flag, value)?;
                i += 1;
            }
            "--height" => {
                cfg.window_height = parse_value(flag, value)?;
                i += 1;
            }
            "--lerp" => {
                cfg.smooth_lerp = parse_value(flag, value)?;
                i += 1;
            }
            _ => log::warn!("ignoring unknown argument {:?}", flag),
        }
        i += 1;
    }

    if cfg.window_width <= 0 || cfg.window_height <= 0 {
        return Err(GalleryError::InvalidArgument {
            flag: "--width/--height".to_string(),
            value: format!("{}x{}", cfg.window_width, cfg.window_height),
        });
    }

    Ok(cfg)
}

fn run(cfg: GalleryConfig) -> Result<()> {
    // Without smooth scrolling nothing else is built.
    let smooth = SmoothScroll::new(SmoothScrollOptions {
        lerp: cfg.smooth_lerp,
        ..SmoothScrollOptions::default()
    })?;

    let mut window = WindowX11::new();
    window.create(cfg.window_width, cfg.window_height, "Card Gallery")?;
    let mut renderer = RendererCairo::new(window.create_cairo_context()?);

    let rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut app = GalleryApp::new(
        cfg,
        window.width() as f64,
        window.height() as f64,
        smooth,
        rng,
    );
    let view = GalleryView::new();

    let mut last_time = Instant::now();

    // Main loop
    'frames: loop {
        if !window.poll_events() {
            break;
        }

        for event in window.take_mouse_events() {
            app.handle_mouse(&event);
        }
        for event in window.take_key_events() {
            if app.handle_key(&event) {
                break 'frames;
            }
        }

        if let Some((w, h)) = window.take_resize() {
            app.resize(w as f64, h as f64);
            renderer.set_context(window.create_cairo_context()?);
        }

        // Delta time
        let now = Instant::now();
        let dt = now.duration_since(last_time).as_secs_f64() * 1000.0;
        last_time = now;

        app.frame(dt);

        let orch = app.orchestrator();
        let active = orch
            .pending_section()
            .unwrap_or(orch.state().current_section);

        renderer.begin_frame(window.width(), window.height());
        view.render(&renderer, orch.surface(), orch.geometry(), active);
        renderer.end_frame();

        window.flush();

        // Cap at ~60fps
        std::thread::sleep(std::time::Duration::from_millis(config::FRAME_MS));
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let argv: Vec<String> = std::env::args().collect();
    let cfg = match parse_args(&argv) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cfg) {
        log::error!("{}; gallery not started", e);
        std::process::exit(1);
    }
}
