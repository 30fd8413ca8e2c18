//! Style Pipeline Integration Tests
//!
//! End-to-end tests from authored declarations to resolved render output.

use serde_json::json;
use std::sync::Arc;
use vex_ui::app_ui::normalize::{normalize_value, Normalized};
use vex_ui::app_ui::{InteractiveDeclaration, StyleDeclaration};
use vex_ui::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn themed_native() -> StyleOptions {
    StyleOptions::native().with_theme(Arc::new(app_ui_light()))
}

fn app_ui_light() -> Theme {
    vex_ui::app_ui::light_theme()
}

/// The box example: native output resolves units and colors, web output is untouched
#[test]
fn test_box_native_and_web_output() {
    init_tracing();

    let decls = StyleDeclarations::new().with(
        "box",
        style_map! { "padding" => "10px", "color" => "var(--accent-1)" },
    );

    let native = UnifiedStyles::build(&decls, &themed_native());
    assert_eq!(native.native["box"], style_map! { "padding" => 10, "color" => "#f97316" });

    let web = UnifiedStyles::build(&decls, &StyleOptions::default());
    assert_eq!(
        web.native["box"],
        style_map! { "padding" => "10px", "color" => "var(--accent-1)" }
    );
    assert_eq!(web.web["box"], "box");
}

/// Border shorthand expands into width/style/color on native
#[test]
fn test_border_shorthand_expansion() {
    let theme = app_ui_light();
    let decls = StyleDeclarations::new().with("card", style_map! { "border" => "1px solid var(--shade-2)" });

    let styles = UnifiedStyles::build(&decls, &themed_native());
    assert_eq!(
        styles.native["card"],
        style_map! {
            "borderWidth" => 1,
            "borderStyle" => "solid",
            "borderColor" => theme.shade.shade_2.as_str(),
        }
    );
}

/// px and rem lengths become whole pixels across a range of inputs
#[test]
fn test_length_normalization_grid() {
    let options = StyleOptions::native();

    for n in [0i64, 1, 7, 16, 250, 1024] {
        let px = normalize_value("width", &StyleValue::from(format!("{}px", n)), &options);
        assert_eq!(px, Normalized::Value(StyleValue::Int(n)));
    }

    for n in [0.25f64, 0.5, 1.0, 1.125, 2.0, 3.75] {
        let rem = normalize_value("margin", &StyleValue::from(format!("{}rem", n)), &options);
        assert_eq!(rem, Normalized::Value(StyleValue::Int((n * 16.0).round() as i64)));
    }
}

/// The three views always carry the declared class names
#[test]
fn test_views_share_keys_for_json_declarations() {
    let decls = StyleDeclarations::from_value(json!({
        "header": { "height": "64px", "borderBottom": "1px solid var(--shade-2)" },
        "title": { "fontSize": { "base": "1.25rem", "tablet": "1.5rem" } },
        "button": {
            "base": { "padding": "8px 16px", "borderRadius": "var(--radius)" },
            "hover": { "backgroundColor": "var(--shade-1)" }
        }
    }))
    .unwrap();

    for options in [StyleOptions::default(), StyleOptions::native(), themed_native()] {
        let styles = UnifiedStyles::build(&decls, &options);
        let declared: Vec<_> = decls.class_names().cloned().collect();
        assert_eq!(styles.native.keys().cloned().collect::<Vec<_>>(), declared);
        assert_eq!(styles.web.keys().cloned().collect::<Vec<_>>(), declared);
        assert_eq!(styles.all.keys().cloned().collect::<Vec<_>>(), declared);
    }
}

/// A broken declaration renders unstyled instead of failing
#[test]
fn test_malformed_declaration_degrades() {
    init_tracing();

    let styles = UnifiedStyles::from_json(&json!(null), &StyleOptions::native());
    assert!(styles.is_empty());

    let partial = UnifiedStyles::from_json(
        &json!({ "box": { "padding": "4px", "includeFontPadding": false }, "broken": 42 }),
        &StyleOptions::native(),
    );
    let declared = vec!["box".to_string(), "broken".to_string()];
    assert_eq!(partial.native.keys().cloned().collect::<Vec<_>>(), declared);
    assert_eq!(partial.web.keys().cloned().collect::<Vec<_>>(), declared);
    assert_eq!(partial.all.keys().cloned().collect::<Vec<_>>(), declared);
    assert_eq!(partial.native["box"], style_map! { "padding" => 4, "includeFontPadding" => false });

    let ctx = PlatformContext::new(Platform::Native, Viewport::new(390, 844));
    let mut proxy = StyleProxy::new(
        Arc::new(styles),
        Arc::new(app_ui_light()),
        Some(ctx),
        StyleConfig::default(),
    );
    assert!(proxy.get("anything").is_none());
}

/// Responsive values follow the breakpoint walk at render time
#[test]
fn test_responsive_resolution_through_proxy() {
    let decls = StyleDeclarations::new().with(
        "title",
        style_map! { "fontSize" => style_map! { "base" => "1.25rem", "tablet" => "1.5rem" } },
    );

    let ctx = PlatformContext::new(Platform::Native, Viewport::new(375, 812));
    let mut proxy = StyleProxy::from_declarations(&decls, Arc::new(app_ui_light()), Some(ctx), StyleConfig::default());

    assert_eq!(proxy.get("title").unwrap().style["fontSize"], StyleValue::Int(20));

    proxy.set_viewport(Viewport::new(Breakpoint::Tablet.threshold(), 1024));
    assert_eq!(proxy.get("title").unwrap().style["fontSize"], StyleValue::Int(24));

    proxy.set_viewport(Viewport::new(Breakpoint::Desktop.threshold() - 1, 1024));
    assert_eq!(proxy.get("title").unwrap().style["fontSize"], StyleValue::Int(24));

    proxy.set_viewport(Viewport::new(Breakpoint::Tablet.threshold() - 1, 1024));
    assert_eq!(proxy.get("title").unwrap().style["fontSize"], StyleValue::Int(20));
}

/// Cached entries are reused until the theme instance changes
#[test]
fn test_cache_reuse_and_theme_invalidation() {
    let decls = StyleDeclarations::new().with("surface", style_map! { "backgroundColor" => "var(--background)" });
    let ctx = PlatformContext::new(Platform::Native, Viewport::new(390, 844));

    let mut themes = ThemeState::new(ColorMode::Light, &ctx);
    let mut proxy = StyleProxy::from_declarations(&decls, themes.current_theme(), Some(ctx), StyleConfig::default());

    let first = proxy.get("surface").unwrap();
    let again = proxy.get("surface").unwrap();
    assert!(Arc::ptr_eq(&first, &again));
    assert_eq!(first.style["backgroundColor"], StyleValue::from("#ffffff"));

    // Observing an unchanged environment keeps the theme instance and the cache
    proxy.set_theme(themes.observe(&ctx));
    assert!(Arc::ptr_eq(&first, &proxy.get("surface").unwrap()));

    proxy.set_theme(themes.set_color_mode(ColorMode::Dark, &ctx));
    let dark = proxy.get("surface").unwrap();
    assert!(!Arc::ptr_eq(&first, &dark));
    assert_eq!(dark.style["backgroundColor"], StyleValue::from("#0a0a0a"));
}

/// Interactive classes: the builder supplies the base, the hook layers overlays
#[test]
fn test_interactive_composition() {
    let decls = StyleDeclarations::from_json_str(
        r#"{
            "button": {
                "base": { "padding": "8px", "color": "var(--foreground)" },
                "hover": { "color": "var(--accent-1)" },
                "active": { "opacity": 0.8 },
                "disabled": { "opacity": 0.4 }
            }
        }"#,
    )
    .unwrap();

    let options = themed_native();
    let styles = UnifiedStyles::build(&decls, &options);
    assert_eq!(styles.native["button"], style_map! { "padding" => 8, "color" => "#0a0a0a" });

    let Some(StyleDeclaration::Interactive(decl)) = decls.get("button") else {
        panic!("button should be interactive");
    };
    let mut button = Interactive::new(InteractiveStyles::from_declaration(decl, &options));

    button.mouse_enter();
    button.mouse_down();
    let output = button.output();
    assert_eq!(output.style["color"], StyleValue::from("#f97316"));
    assert_eq!(output.style["opacity"], StyleValue::Float(0.8));

    // Pointer leaves mid-press
    button.mouse_leave();
    assert!(!button.state().is_pressed);
    assert_eq!(button.computed_style(), styles.native["button"]);

    button.set_disabled(true);
    button.mouse_enter();
    button.mouse_down();
    button.focus();
    assert!(!button.state().is_hovered);
    assert!(!button.state().is_pressed);
    assert!(!button.state().is_focused);
    assert_eq!(button.computed_style()["opacity"], StyleValue::Float(0.4));
}

/// Declarations can be authored as typed values too
#[test]
fn test_typed_interactive_declaration() {
    let decl = InteractiveDeclaration {
        base: style_map! { "margin" => "0.5rem" },
        focus: Some(style_map! { "borderColor" => "var(--accent-0)" }),
        ..Default::default()
    };
    let decls = StyleDeclarations::new().with("input", decl);

    let styles = UnifiedStyles::build(&decls, &StyleOptions::native());
    assert_eq!(styles.native["input"], style_map! { "margin" => 8 });
}
