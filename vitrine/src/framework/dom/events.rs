pub fn on_dom_ready(body: &str) -> String {
    format!("document.addEventListener(\"DOMContentLoaded\", () => {{\n{body}\n}});")
}
