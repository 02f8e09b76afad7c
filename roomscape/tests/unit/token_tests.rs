use roomscape::server::check_styles;
use roomscape::tokens::{content_scan, design_tokens};
use strum::IntoEnumIterator;
use vitrine::Theme;
use vitrine::styling::utilities::{check_utilities, generate};

#[test]
fn test_every_color_role_is_declared() {
    let tokens = design_tokens();
    let names: Vec<&str> = tokens.colors().iter().map(|role| role.name()).collect();

    for role in [
        "border", "input", "ring", "background", "foreground", "primary", "secondary",
        "destructive", "muted", "accent", "popover", "card", "success", "warning", "error",
    ] {
        assert!(names.contains(&role), "missing color role {role}");
    }
}

#[test]
fn test_paired_roles_carry_a_foreground() {
    let tokens = design_tokens();
    for role in tokens.colors() {
        match role.name() {
            "border" | "input" | "ring" | "background" | "foreground" => {
                assert!(role.foreground().is_none(), "{} should be single-valued", role.name())
            }
            _ => assert!(role.foreground().is_some(), "{} should be paired", role.name()),
        }
    }
}

#[test]
fn test_token_round_trip_resolves_in_every_theme() {
    let themes: Vec<(String, Vec<_>)> = Theme::iter()
        .map(|theme| (theme.to_string(), theme.variable_rules()))
        .collect();
    assert!(check_utilities(&generate(&design_tokens()), &themes).is_ok());
}

#[test]
fn test_check_styles_passes_for_the_shipped_configuration() {
    assert!(check_styles().is_ok());
}

#[test]
fn test_scan_covers_the_view_sources() {
    let patterns = content_scan();
    assert!(
        patterns
            .patterns()
            .iter()
            .any(|pattern| pattern.contains("roomscape/src"))
    );
}

#[test]
fn test_scale_categories_are_populated() {
    let tokens = design_tokens();
    assert!(!tokens.spacing_scale().is_empty());
    assert!(!tokens.font_sizes().is_empty());
    assert!(!tokens.shadows().is_empty());
    assert!(!tokens.keyframes_set().is_empty());
    assert!(!tokens.easings().is_empty());
    assert!(!tokens.durations().is_empty());
    assert!(!tokens.aspect_ratios().is_empty());
    assert!(!tokens.z_layers().is_empty());
    assert!(!tokens.grid_templates().is_empty());
    assert!(!tokens.letter_spacing_scale().is_empty());
    assert!(!tokens.line_heights().is_empty());
}
