use roomscape::config::RoomscapeConfig;
use roomscape::routes::View;
use roomscape::server::app_shell;
use roomscape::views;
use strum::IntoEnumIterator;

#[test]
fn test_every_view_renders() {
    for view in View::iter() {
        let element = views::render(view).expect("view renders");
        assert!(!element.render().is_empty(), "{view} rendered empty markup");
    }
}

#[test]
fn test_camera_portal_page_scenario() {
    let shell = app_shell(&RoomscapeConfig::default());
    let page = shell.guarded_page(|| views::render(View::CameraPortal));

    assert!(page.contains("AR Camera Portal"));
    assert!(page.contains("/assets/js/scroll.js"));
    assert!(!page.contains("render-fallback"));
}

#[test]
fn test_pages_load_theme_and_scroll_scripts() {
    let shell = app_shell(&RoomscapeConfig::default());
    let page = shell.guarded_page(|| views::render(View::Home));

    assert!(page.contains("/assets/js/theme.js"));
    assert!(page.contains("/assets/js/scroll.js"));
    assert!(page.contains("data-theme=\"dark\""));
}

#[test]
fn test_failed_render_shows_fallback_and_spares_other_views() {
    let shell = app_shell(&RoomscapeConfig::default());

    let broken = shell.guarded_page(|| Err(anyhow::anyhow!("camera feed unavailable")));
    assert!(broken.contains("render-fallback"));
    assert!(broken.contains("Something went wrong"));

    let healthy = shell.guarded_page(|| views::render(View::Catalog));
    assert!(healthy.contains("Furniture Universe"));
    assert!(!healthy.contains("render-fallback"));
}

#[test]
fn test_home_links_every_experience() {
    let home = views::render(View::Home).expect("home renders").render();
    for view in View::iter() {
        if view == View::Home || view == View::NotFound {
            continue;
        }
        let path = view.path().expect("declared path");
        assert!(home.contains(path), "home is missing a link to {path}");
    }
}

#[test]
fn test_not_found_links_back_home() {
    let page = views::render(View::NotFound).expect("renders").render();
    assert!(page.contains("href=\"/\""));
}
