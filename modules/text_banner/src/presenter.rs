//! Banner markup and styling.
//!
//! Pure functions of their inputs. Templates are HTML auto-escaped, so link,
//! text and color values can never break out of their attribute or rule.

use askama::Template;

use crate::contract::{BannerColors, BannerError, BannerSnapshot};

#[derive(Template)]
#[template(
    source = r#"<div id="textbanner"><div class="textbanner-container">{% if link.is_empty() %}<span class="textbanner-text">{{ text }}</span>{% else %}<a class="textbanner-link" href="{{ link }}">{{ text }}</a>{% endif %}</div></div>"#,
    ext = "html"
)]
struct BannerTemplate<'a> {
    link: &'a str,
    text: &'a str,
}

#[derive(Template)]
#[template(
    source = "<!-- Text Banner Styling --><style>{% if !background.is_empty() %}#textbanner .textbanner-container { background-color:{{ background }};}{% endif %}{% if !background_hover.is_empty() %}#textbanner .textbanner-container:hover { background-color:{{ background_hover }};}{% endif %}{% if !foreground.is_empty() %}#textbanner .textbanner-container { color:{{ foreground }};}{% endif %}</style>",
    ext = "html"
)]
struct StylingTemplate<'a> {
    background: &'a str,
    background_hover: &'a str,
    foreground: &'a str,
}

/// Banner markup for the snapshot's language, empty when disabled.
pub fn render_banner(snapshot: &BannerSnapshot) -> Result<String, BannerError> {
    if !snapshot.settings.enabled {
        return Ok(String::new());
    }
    let template = BannerTemplate {
        link: &snapshot.settings.link,
        text: &snapshot.settings.text,
    };
    Ok(template.render()?)
}

/// `<style>` block with one rule per non-empty color.
pub fn render_styling(colors: &BannerColors) -> Result<String, BannerError> {
    let template = StylingTemplate {
        background: &colors.background,
        background_hover: &colors.background_hover,
        foreground: &colors.foreground,
    };
    Ok(template.render()?)
}
