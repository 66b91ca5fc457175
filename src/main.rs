#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

use crate::util::version::APP_NAME;

/// Renderer settings forced under Wayland, applied only where the user left them unset.
const WAYLAND_DEFAULTS: [(&str, &str); 2] = [
    ("WGPU_BACKEND", "gl"),
    ("WEBKIT_DISABLE_DMABUF_RENDERER", "1"),
];

fn wayland_defaults(
    on_wayland: bool,
    is_set: impl Fn(&str) -> bool,
) -> Vec<(&'static str, &'static str)> {
    if !on_wayland {
        return Vec::new();
    }
    WAYLAND_DEFAULTS
        .into_iter()
        .filter(|(key, _)| !is_set(*key))
        .collect()
}

fn main() {
    let on_wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    for (key, value) in wayland_defaults(on_wayland, |key| std::env::var_os(key).is_some()) {
        std::env::set_var(key, value);
    }

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
                    .with_inner_size(LogicalSize::new(1100.0, 820.0))
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wayland_defaults_respect_existing_settings() {
        assert!(wayland_defaults(false, |_| false).is_empty());
        assert_eq!(
            wayland_defaults(true, |key| key == "WGPU_BACKEND"),
            vec![("WEBKIT_DISABLE_DMABUF_RENDERER", "1")]
        );
        assert_eq!(wayland_defaults(true, |_| false).len(), 2);
    }
}
