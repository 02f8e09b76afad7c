/// Resets viewport scroll to the top on every navigation transition, before
/// the incoming view is visible. The shell scrolls inside its `content`
/// region, so both the window and that region are reset.
pub fn scroll_js() -> String {
    r#"// ---- Scroll Reset ----

function resetScroll() {
    window.scrollTo(0, 0);
    const region = document.querySelector("content");
    if (region) {
        region.scrollTop = 0;
    }
}

document.addEventListener("DOMContentLoaded", resetScroll);
window.addEventListener("popstate", resetScroll);
window.addEventListener("pageshow", (event) => {
    if (event.persisted) {
        resetScroll();
    }
});
"#
    .trim()
    .to_string()
}
