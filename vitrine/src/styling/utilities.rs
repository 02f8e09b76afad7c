use crate::styling::StyleError;
use crate::styling::css::CssRule;
use crate::styling::tokens::DesignTokens;
use std::collections::BTreeSet;

/// One generated utility class. `support` carries a companion rule that
/// must ship alongside the class, e.g. the `@keyframes` behind `animate-*`.
#[derive(Clone, Debug)]
pub struct Utility {
    class: String,
    rule: CssRule,
    support: Option<CssRule>,
}

impl Utility {
    fn new(class: String, rule: CssRule) -> Self {
        Self {
            class,
            rule,
            support: None,
        }
    }

    fn with_support(mut self, rule: CssRule) -> Self {
        self.support = Some(rule);
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn rule(&self) -> &CssRule {
        &self.rule
    }

    pub fn support(&self) -> Option<&CssRule> {
        self.support.as_ref()
    }
}

fn single(class: String, property: &str, value: &str) -> Utility {
    let rule = CssRule::new(&format!(".{class}")).property(property, value);
    Utility::new(class, rule)
}

/// Generates the full utility set for a token registry. Filtering to the
/// classes a codebase actually references happens in [`crate::styling::scan`].
pub fn generate(tokens: &DesignTokens) -> Vec<Utility> {
    let mut utilities = Vec::new();

    for role in tokens.colors() {
        let base = role.base().css();
        utilities.push(single(format!("bg-{}", role.name()), "background-color", &base));
        utilities.push(single(format!("text-{}", role.name()), "color", &base));
        utilities.push(single(format!("border-{}", role.name()), "border-color", &base));
        if let Some(foreground) = role.foreground() {
            let fg = foreground.css();
            utilities.push(single(format!("text-{}-foreground", role.name()), "color", &fg));
            utilities.push(single(
                format!("bg-{}-foreground", role.name()),
                "background-color",
                &fg,
            ));
        }
    }

    for (name, value) in tokens.spacing_scale() {
        let value = value.css();
        utilities.push(single(format!("p-{name}"), "padding", &value));
        utilities.push(single(format!("m-{name}"), "margin", &value));
        utilities.push(single(format!("gap-{name}"), "gap", &value));
    }

    for (name, value) in tokens.font_sizes() {
        utilities.push(single(format!("text-{name}"), "font-size", &value.css()));
    }

    for (name, value) in tokens.letter_spacing_scale() {
        utilities.push(single(format!("tracking-{name}"), "letter-spacing", &value.css()));
    }

    for (name, value) in tokens.line_heights() {
        utilities.push(single(format!("leading-{name}"), "line-height", &value.css()));
    }

    for (name, value) in tokens.shadows() {
        utilities.push(single(format!("shadow-{name}"), "box-shadow", &value.css()));
    }

    for keyframes in tokens.keyframes_set() {
        let class = format!("animate-{}", keyframes.name());
        let rule = CssRule::new(&format!(".{class}")).property("animation", keyframes.shorthand());
        utilities.push(Utility::new(class, rule).with_support(keyframes.rule()));
    }

    for (name, value) in tokens.easings() {
        utilities.push(single(
            format!("ease-{name}"),
            "transition-timing-function",
            &value.css(),
        ));
    }

    for (name, value) in tokens.durations() {
        utilities.push(single(
            format!("duration-{name}"),
            "transition-duration",
            &value.css(),
        ));
    }

    for (name, value) in tokens.aspect_ratios() {
        utilities.push(single(format!("aspect-{name}"), "aspect-ratio", &value.css()));
    }

    for (name, value) in tokens.z_layers() {
        utilities.push(single(format!("z-{name}"), "z-index", &value.css()));
    }

    for (name, value) in tokens.grid_templates() {
        let class = format!("grid-{name}");
        let rule = CssRule::new(&format!(".{class}"))
            .property("display", "grid")
            .property("grid-template-columns", &value.css());
        utilities.push(Utility::new(class, rule));
    }

    utilities
}

/// Renders utilities to a stylesheet. Support rules are emitted first and
/// deduplicated by selector, so two `animate-*` classes sharing keyframes
/// declare them once.
pub fn stylesheet(utilities: &[Utility]) -> String {
    let mut seen_support = BTreeSet::new();
    let mut out = Vec::new();

    for utility in utilities {
        if let Some(support) = utility.support()
            && seen_support.insert(support.selector().to_string())
        {
            out.push(support.render());
        }
    }

    for utility in utilities {
        out.push(utility.rule().render());
    }

    out.join("\n")
}

/// Extracts `var(--name)` references from a property value, including the
/// reference in a `var(--name, fallback)` form.
pub fn var_references(value: &str) -> Vec<String> {
    let mut refs = Vec::new();
    let mut rest = value;
    while let Some(start) = rest.find("var(") {
        let inner = &rest[start + 4..];
        let end = inner.find([',', ')']).unwrap_or(inner.len());
        let name = inner[..end].trim();
        if name.starts_with("--") {
            refs.push(name.to_string());
        }
        rest = inner;
    }
    refs
}

fn declared_variables(rules: &[CssRule]) -> BTreeSet<String> {
    let mut declared = BTreeSet::new();
    for rule in rules {
        rule.walk_properties(&mut |name, _| {
            if name.starts_with("--") {
                declared.insert(name.to_string());
            }
        });
    }
    declared
}

/// Verifies that every `var()` reference in `rules` resolves against the
/// variables each named theme declares. Undeclared references are orphans.
pub fn check_rules(rules: &[CssRule], themes: &[(String, Vec<CssRule>)]) -> Result<(), StyleError> {
    for (theme, theme_rules) in themes {
        let declared = declared_variables(theme_rules);
        for rule in rules {
            let mut orphan = None;
            rule.walk_properties(&mut |_, value| {
                for reference in var_references(value) {
                    if !declared.contains(&reference) && orphan.is_none() {
                        orphan = Some(reference);
                    }
                }
            });
            if let Some(variable) = orphan {
                return Err(StyleError::OrphanVariable {
                    selector: rule.selector().to_string(),
                    variable,
                    theme: theme.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Convenience over [`check_rules`] for generated utilities.
pub fn check_utilities(
    utilities: &[Utility],
    themes: &[(String, Vec<CssRule>)],
) -> Result<(), StyleError> {
    let mut rules = Vec::new();
    for utility in utilities {
        rules.push(utility.rule().clone());
        if let Some(support) = utility.support() {
            rules.push(support.clone());
        }
    }
    check_rules(&rules, themes)
}
