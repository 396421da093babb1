//! Named styles and template rendering.
//!
//! A [`Theme`] maps style names to `console` styles. Templates refer to styles by name
//! through the `style` filter (`{{ title | style("title") }}`), so the templates never
//! see color codes. A style name the theme doesn't know renders with the
//! [`MISSING_STYLE_INDICATOR`] in front of the text, which makes typos in templates
//! visible instead of silently unstyled.

use console::{Style, Term};
use minijinja::{Environment, Error, Value};
use serde::Serialize;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.has(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }
}

/// Renders with colors when stdout supports them and they haven't been turned off.
pub fn render<T: Serialize>(template: &str, data: &T, theme: &Theme) -> Result<String, Error> {
    let use_color = console::colors_enabled() && Term::stdout().features().colors_supported();
    render_with_color(template, data, theme, use_color)
}

pub fn render_with_color<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    use_color: bool,
) -> Result<String, Error> {
    let mut env = Environment::new();
    register_style_filter(&mut env, theme.clone(), use_color);

    env.add_template_owned("_inline".to_string(), template.to_string())?;
    let tmpl = env.get_template("_inline")?;
    tmpl.render(data)
}

fn register_style_filter(env: &mut Environment<'static>, theme: Theme, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        if use_color {
            theme.apply(&name, &text)
        } else {
            theme.apply_plain(&name, &text)
        }
    });
}

pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Greeting {
        name: String,
    }

    fn theme() -> Theme {
        Theme::new().add("name", Style::new().bold())
    }

    #[test]
    fn plain_rendering_drops_styles() {
        let data = Greeting {
            name: "Ana".into(),
        };
        let out = render_with_color("Hi {{ name | style(\"name\") }}!", &data, &theme(), false)
            .unwrap();
        assert_eq!(out, "Hi Ana!");
    }

    #[test]
    fn unknown_style_is_flagged() {
        let data = Greeting {
            name: "Ana".into(),
        };
        let out = render_with_color("{{ name | style(\"nope\") }}", &data, &theme(), false)
            .unwrap();
        assert_eq!(out, "(!?) Ana");
    }

    #[test]
    fn template_errors_surface() {
        let data = Greeting {
            name: "Ana".into(),
        };
        assert!(render_with_color("{{ name | style( }}", &data, &theme(), false).is_err());
    }

    #[test]
    fn ansi256_conversion() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
    }
}
