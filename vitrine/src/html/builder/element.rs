/// A single HTML element under construction.
///
/// Attributes keep insertion order so rendering is deterministic.
#[derive(Clone, Debug)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text_content: Option<String>,
    onclick: Option<String>,
    onchange: Option<String>,
    raw: bool,
    defer: bool,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            text_content: None,
            onclick: None,
            onchange: None,
            raw: false,
            defer: false,
        }
    }

    /// Sets an attribute, replacing any previous value for the same key.
    pub fn attr(mut self, key: &str, value: &str) -> Self {
        if let Some(entry) = self.attributes.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.attributes.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn id(self, value: &str) -> Self {
        self.attr("id", value)
    }

    pub fn href(self, value: &str) -> Self {
        self.attr("href", value)
    }

    /// Appends to the class list instead of replacing it.
    pub fn class(mut self, class: &str) -> Self {
        match self.attributes.iter_mut().find(|(k, _)| k == "class") {
            Some(entry) => {
                entry.1.push(' ');
                entry.1.push_str(class);
            }
            None => self.attributes.push(("class".to_string(), class.to_string())),
        }
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text_content = Some(text.to_string());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn child_opt(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn on_click(mut self, js_code: &str) -> Self {
        self.onclick = Some(js_code.to_string());
        self
    }

    pub fn on_change(mut self, js_code: &str) -> Self {
        self.onchange = Some(js_code.to_string());
        self
    }

    /// Insert text content verbatim, without HTML escaping.
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    pub fn defer(mut self) -> Self {
        self.defer = true;
        self
    }

    pub fn render(&self) -> String {
        let mut html = format!("<{}", self.tag);

        for (key, value) in &self.attributes {
            html.push_str(&format!(" {}=\"{}\"", key, escape(value)));
        }

        if let Some(onclick) = &self.onclick {
            html.push_str(&format!(" onclick=\"{}\"", escape(onclick)));
        }

        if let Some(onchange) = &self.onchange {
            html.push_str(&format!(" onchange=\"{}\"", escape(onchange)));
        }

        if self.defer {
            html.push_str(" defer");
        }

        html.push('>');
        if let Some(text) = &self.text_content {
            if self.raw {
                html.push_str(text);
            } else {
                html.push_str(&escape(text));
            }
        }

        for child in &self.children {
            html.push_str(&child.render());
        }

        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
