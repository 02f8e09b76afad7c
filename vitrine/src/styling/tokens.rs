use crate::styling::css::CssRule;

/// A design token value: either an indirection to a CSS custom property
/// supplied by the active theme, or a literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenValue {
    Var(String),
    Literal(String),
}

impl TokenValue {
    /// `TokenValue::var("--color-primary")`
    pub fn var(name: &str) -> Self {
        Self::Var(name.to_string())
    }

    pub fn literal(value: &str) -> Self {
        Self::Literal(value.to_string())
    }

    pub fn css(&self) -> String {
        match self {
            Self::Var(name) => format!("var({name})"),
            Self::Literal(value) => value.clone(),
        }
    }
}

/// A semantic color role. Roles like `primary` carry a base value and a
/// paired foreground; single-valued roles like `border` carry only a base.
#[derive(Clone, Debug)]
pub struct ColorRole {
    name: String,
    base: TokenValue,
    foreground: Option<TokenValue>,
}

impl ColorRole {
    pub fn new(name: &str, base: TokenValue) -> Self {
        Self {
            name: name.to_string(),
            base,
            foreground: None,
        }
    }

    pub fn with_foreground(mut self, value: TokenValue) -> Self {
        self.foreground = Some(value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base(&self) -> &TokenValue {
        &self.base
    }

    pub fn foreground(&self) -> Option<&TokenValue> {
        self.foreground.as_ref()
    }
}

/// A named `@keyframes` animation plus the shorthand applied by its
/// `animate-*` utility.
#[derive(Clone, Debug)]
pub struct Keyframes {
    name: String,
    shorthand: String,
    frames: Vec<CssRule>,
}

impl Keyframes {
    pub fn new(name: &str, shorthand: &str) -> Self {
        Self {
            name: name.to_string(),
            shorthand: shorthand.to_string(),
            frames: Vec::new(),
        }
    }

    pub fn frame(mut self, rule: CssRule) -> Self {
        self.frames.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shorthand(&self) -> &str {
        &self.shorthand
    }

    /// The `@keyframes` rule for the stylesheet.
    pub fn rule(&self) -> CssRule {
        let mut rule = CssRule::new(&format!("@keyframes {}", self.name));
        for frame in &self.frames {
            rule = rule.child(frame.clone());
        }
        rule
    }
}

/// The closed set of design tokens a product declares once at config time.
/// Immutable after construction; consumed by utility-class generation.
#[derive(Clone, Debug, Default)]
pub struct DesignTokens {
    colors: Vec<ColorRole>,
    spacing: Vec<(String, TokenValue)>,
    font_sizes: Vec<(String, TokenValue)>,
    letter_spacing: Vec<(String, TokenValue)>,
    line_heights: Vec<(String, TokenValue)>,
    shadows: Vec<(String, TokenValue)>,
    keyframes: Vec<Keyframes>,
    easings: Vec<(String, TokenValue)>,
    durations: Vec<(String, TokenValue)>,
    aspect_ratios: Vec<(String, TokenValue)>,
    z_layers: Vec<(String, TokenValue)>,
    grid_templates: Vec<(String, TokenValue)>,
}

impl DesignTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, role: ColorRole) -> Self {
        self.colors.push(role);
        self
    }

    pub fn spacing(mut self, name: &str, value: TokenValue) -> Self {
        self.spacing.push((name.to_string(), value));
        self
    }

    pub fn font_size(mut self, name: &str, value: TokenValue) -> Self {
        self.font_sizes.push((name.to_string(), value));
        self
    }

    pub fn letter_spacing(mut self, name: &str, value: TokenValue) -> Self {
        self.letter_spacing.push((name.to_string(), value));
        self
    }

    pub fn line_height(mut self, name: &str, value: TokenValue) -> Self {
        self.line_heights.push((name.to_string(), value));
        self
    }

    pub fn shadow(mut self, name: &str, value: TokenValue) -> Self {
        self.shadows.push((name.to_string(), value));
        self
    }

    pub fn keyframes(mut self, keyframes: Keyframes) -> Self {
        self.keyframes.push(keyframes);
        self
    }

    pub fn easing(mut self, name: &str, value: TokenValue) -> Self {
        self.easings.push((name.to_string(), value));
        self
    }

    pub fn duration(mut self, name: &str, value: TokenValue) -> Self {
        self.durations.push((name.to_string(), value));
        self
    }

    pub fn aspect_ratio(mut self, name: &str, value: TokenValue) -> Self {
        self.aspect_ratios.push((name.to_string(), value));
        self
    }

    pub fn z_layer(mut self, name: &str, value: TokenValue) -> Self {
        self.z_layers.push((name.to_string(), value));
        self
    }

    pub fn grid_template(mut self, name: &str, value: TokenValue) -> Self {
        self.grid_templates.push((name.to_string(), value));
        self
    }

    pub fn colors(&self) -> &[ColorRole] {
        &self.colors
    }

    pub fn spacing_scale(&self) -> &[(String, TokenValue)] {
        &self.spacing
    }

    pub fn font_sizes(&self) -> &[(String, TokenValue)] {
        &self.font_sizes
    }

    pub fn letter_spacing_scale(&self) -> &[(String, TokenValue)] {
        &self.letter_spacing
    }

    pub fn line_heights(&self) -> &[(String, TokenValue)] {
        &self.line_heights
    }

    pub fn shadows(&self) -> &[(String, TokenValue)] {
        &self.shadows
    }

    pub fn keyframes_set(&self) -> &[Keyframes] {
        &self.keyframes
    }

    pub fn easings(&self) -> &[(String, TokenValue)] {
        &self.easings
    }

    pub fn durations(&self) -> &[(String, TokenValue)] {
        &self.durations
    }

    pub fn aspect_ratios(&self) -> &[(String, TokenValue)] {
        &self.aspect_ratios
    }

    pub fn z_layers(&self) -> &[(String, TokenValue)] {
        &self.z_layers
    }

    pub fn grid_templates(&self) -> &[(String, TokenValue)] {
        &self.grid_templates
    }
}
