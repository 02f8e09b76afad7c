use vitrine::boundary;
use vitrine::html::div;

#[test]
fn test_successful_render_passes_through() {
    let element = boundary::contain(|| Ok(div().class("page").text("ok")));
    assert_eq!(element.render(), "<div class=\"page\">ok</div>");
}

#[test]
fn test_failed_render_substitutes_fallback() {
    let element = boundary::contain(|| Err(anyhow::anyhow!("camera feed unavailable")));
    let html = element.render();
    assert!(html.contains("render-fallback"));
    assert!(html.contains("Something went wrong"));
}

#[test]
fn test_failure_does_not_poison_later_renders() {
    let _ = boundary::contain(|| Err(anyhow::anyhow!("boom")));
    let element = boundary::contain(|| Ok(div().text("still alive")));
    assert_eq!(element.render(), "<div>still alive</div>");
}
