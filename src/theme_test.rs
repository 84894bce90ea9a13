use super::*;

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_recognizes_both_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("blue"), None);
    assert_eq!(Theme::parse("LIGHT"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn from_jar_defaults_to_light_when_absent() {
    let jar = CookieJar::new();
    assert_eq!(Theme::from_jar(&jar), Theme::Light);
}

#[test]
fn from_jar_defaults_to_light_when_unrecognized() {
    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, "solarized"));
    assert_eq!(Theme::from_jar(&jar), Theme::Light);
}

#[test]
fn from_jar_reads_dark() {
    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, "dark"));
    assert_eq!(Theme::from_jar(&jar), Theme::Dark);
}

// =============================================================================
// Toggle
// =============================================================================

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggled_is_an_involution() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn toggle_from_dark_persists_light() {
    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, "dark"));
    let (jar, from, to) = toggle(jar, false);
    assert_eq!(from, Theme::Dark);
    assert_eq!(to, Theme::Light);
    assert_eq!(jar.get(COOKIE_NAME).map(Cookie::value), Some("light"));
}

#[test]
fn toggle_twice_round_trips() {
    let jar = CookieJar::new().add(Cookie::new(COOKIE_NAME, "dark"));
    let (jar, _, _) = toggle(jar, false);
    let (jar, _, _) = toggle(jar, false);
    assert_eq!(jar.get(COOKIE_NAME).map(Cookie::value), Some("dark"));
}

#[test]
fn toggle_without_cookie_writes_dark() {
    let (jar, from, to) = toggle(CookieJar::new(), false);
    assert_eq!(from, Theme::Light);
    assert_eq!(to, Theme::Dark);
    assert_eq!(jar.get(COOKIE_NAME).map(Cookie::value), Some("dark"));
}

// =============================================================================
// Cookie attributes
// =============================================================================

#[test]
fn cookie_has_fixed_attributes() {
    let cookie = Theme::Dark.into_cookie(false);
    assert_eq!(cookie.name(), "theme");
    assert_eq!(cookie.value(), "dark");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(false));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.secure(), Some(false));
    assert_eq!(cookie.max_age(), Some(Duration::days(365)));
}

#[test]
fn cookie_max_age_is_one_year_in_seconds() {
    let cookie = Theme::Light.into_cookie(false);
    assert_eq!(cookie.max_age().map(Duration::whole_seconds), Some(31_536_000));
}

#[test]
fn cookie_secure_flag_follows_config() {
    assert_eq!(Theme::Light.into_cookie(true).secure(), Some(true));
    assert_eq!(Theme::Light.into_cookie(false).secure(), Some(false));
}

// =============================================================================
// Serde
// =============================================================================

#[test]
fn serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
}

#[test]
fn labels_match_rendered_pages() {
    assert_eq!(Theme::Light.label_pt(), "claro");
    assert_eq!(Theme::Dark.label_pt(), "escuro");
}
