//! Platform Integration Tests
//!
//! Viewport watching and platform context flowing into style resolution.

use std::sync::Arc;
use std::time::Duration;
use vex_ui::app_ui::Interactive;
use vex_ui::app_ui::InteractionEvent;
use vex_ui::prelude::*;

fn declarations() -> StyleDeclarations {
    StyleDeclarations::new()
        .with(
            "sidebar",
            style_map! {
                "width" => style_map! { "base" => "100%", "desktop" => "280px" },
                "borderRight" => "1px solid var(--shade-3)",
            },
        )
        .with("headline", style_map! { "fontSize" => "clamp(19px, 4vw, 26px)" })
}

/// Debounced resizes drive re-resolution of responsive styles
#[tokio::test(start_paused = true)]
async fn test_debounced_resize_updates_styles() {
    let config = StyleConfig::default();
    let ctx = PlatformContext::new(Platform::Native, Viewport::new(1280, 800));
    let themes = ThemeState::new(ColorMode::Light, &ctx);
    let mut proxy = StyleProxy::from_declarations(&declarations(), themes.current_theme(), Some(ctx), config.clone());

    assert_eq!(proxy.get("sidebar").unwrap().style["width"], StyleValue::Int(280));
    assert_eq!(proxy.get("headline").unwrap().style["fontSize"], StyleValue::Int(26));

    let watcher = ViewportWatcher::spawn(ctx.viewport, config.resize_debounce_duration()).unwrap();
    let mut updates = watcher.subscribe();

    // A drag-resize emits a burst of events
    for width in [1200, 1000, 800, 600, 500] {
        watcher.notify_resize(Viewport::new(width, 800)).unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(watcher.current(), Viewport::new(1280, 800));

    updates.changed().await.unwrap();
    let viewport = *updates.borrow_and_update();
    assert_eq!(viewport, Viewport::new(500, 800));

    proxy.set_viewport(viewport);
    let sidebar = proxy.get("sidebar").unwrap();
    assert_eq!(sidebar.style["width"], StyleValue::from("100%"));
    assert_eq!(sidebar.style["borderRightWidth"], StyleValue::Int(1));
    assert_eq!(sidebar.style["borderRightColor"], StyleValue::from("#d4d4d4"));
    assert_eq!(proxy.get("headline").unwrap().style["fontSize"], StyleValue::Int(20));

    // Both widths stay cached
    assert!(proxy.is_cached("sidebar", 1280));
    assert!(proxy.is_cached("sidebar", 500));
}

/// Server rendering picks the dark theme and web-style output
#[test]
fn test_server_render_uses_dark_web_styles() {
    let ctx = PlatformContext::server();
    let themes = ThemeState::new(ColorMode::System, &ctx);
    assert_eq!(themes.current_theme().name, ThemeName::Dark);

    let mut proxy = StyleProxy::from_declarations(&declarations(), themes.current_theme(), Some(ctx), StyleConfig::default());
    let sidebar = proxy.get("sidebar").unwrap();
    assert_eq!(sidebar.class_name, "sidebar");
    // Not native: the shorthand stays a shorthand
    assert!(sidebar.style.contains_key("borderRight"));
    assert!(!sidebar.style.contains_key("borderRightWidth"));
}

/// The system color mode follows the platform hint on each observation
#[test]
fn test_system_color_mode_follows_hint() {
    let light_ctx = PlatformContext::new(Platform::Web, Viewport::default()).with_color_scheme(ColorScheme::Light);
    let dark_ctx = light_ctx.with_color_scheme(ColorScheme::Dark);

    let mut themes = ThemeState::new(ColorMode::System, &light_ctx);
    let light = themes.observe(&light_ctx);
    assert_eq!(light.name, ThemeName::Light);

    let dark = themes.observe(&dark_ctx);
    assert_eq!(dark.name, ThemeName::Dark);
    assert!(!Arc::ptr_eq(&light, &dark));
}

/// Handler sets differ by platform but drive the same state machine
#[test]
fn test_platform_handlers_drive_state() {
    let styles = InteractiveStyles::new(style_map! { "opacity" => 1 }).active(style_map! { "opacity" => 0.7 });

    for platform in [Platform::Web, Platform::Native] {
        let mut element = Interactive::new(styles.clone());
        let handlers = Interactive::handlers(platform);

        let press = if platform.is_native() {
            InteractionEvent::PressIn
        } else {
            InteractionEvent::MouseDown
        };
        assert!(handlers.contains(&press));

        element.handle(press);
        assert_eq!(element.computed_style()["opacity"], StyleValue::Float(0.7));
    }
}
