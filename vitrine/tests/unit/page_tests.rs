use vitrine::html::{Link, PageBuilder, Script, div};

#[test]
fn test_page_contains_document_chrome() {
    let page = PageBuilder::new()
        .title("Roomscape")
        .html_attr("data-theme", "dark")
        .links(vec![Link::new("stylesheet", "/assets/css/style.css")])
        .scripts(vec![Script::new("/assets/js/scroll.js")])
        .content(div().class("app").text("shell"))
        .build();

    assert!(page.contains("data-theme=\"dark\""));
    assert!(page.contains("Roomscape"));
    assert!(page.contains("/assets/css/style.css"));
    assert!(page.contains("/assets/js/scroll.js"));
    assert!(page.contains("shell"));
}

#[test]
fn test_page_without_content_still_builds() {
    let page = PageBuilder::new().title("Empty").build();
    assert!(page.contains("Empty"));
    assert!(page.contains("<body>"));
}
