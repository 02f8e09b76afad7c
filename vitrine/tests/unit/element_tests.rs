use vitrine::html::{a, div, p, span};

#[test]
fn test_render_nested() {
    let html = div()
        .class("card")
        .child(p().text("hello"))
        .child(span().text("world"))
        .render();
    assert_eq!(
        html,
        "<div class=\"card\"><p>hello</p><span>world</span></div>"
    );
}

#[test]
fn test_class_appends() {
    let html = div().class("bg-card").class("p-13").render();
    assert_eq!(html, "<div class=\"bg-card p-13\"></div>");
}

#[test]
fn test_attr_replaces() {
    let html = a().href("/old").href("/new").render();
    assert_eq!(html, "<a href=\"/new\"></a>");
}

#[test]
fn test_attribute_order_is_stable() {
    let html = div().id("root").attr("data-kind", "shell").render();
    assert_eq!(html, "<div id=\"root\" data-kind=\"shell\"></div>");
}

#[test]
fn test_text_is_escaped() {
    let html = p().text("a < b & \"c\"").render();
    assert_eq!(html, "<p>a &lt; b &amp; &quot;c&quot;</p>");
}

#[test]
fn test_raw_text_is_not_escaped() {
    let html = p().text("<em>raw</em>").raw().render();
    assert_eq!(html, "<p><em>raw</em></p>");
}

#[test]
fn test_child_opt() {
    let html = div().child_opt(None).child_opt(Some(span())).render();
    assert_eq!(html, "<div><span></span></div>");
}

#[test]
fn test_children_extends() {
    let html = div().children(vec![span().text("a"), span().text("b")]).render();
    assert_eq!(html, "<div><span>a</span><span>b</span></div>");
}
