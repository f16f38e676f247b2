//! Fonts and languages offered by the post editor.
//!
//! The font values are the CSS stacks written into `{font:…}` directives.
//! The language table carries the writing direction used to decide whether a
//! post body should be rendered right-to-left.

use std::fmt;
use std::str::FromStr;

/// Writing direction of a block of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TextDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl TextDirection {
    /// Value of the HTML `dir` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Text-alignment class matching the direction.
    #[must_use]
    pub fn align_class(self) -> &'static str {
        match self {
            Self::Ltr => "text-left",
            Self::Rtl => "text-right",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown text direction `{}` (expected ltr or rtl)", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for TextDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ltr" => Ok(Self::Ltr),
            "rtl" => Ok(Self::Rtl),
            _ => Err(UnknownDirection(s.to_owned())),
        }
    }
}

/// A font choice offered by the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlogFont {
    /// Display name.
    pub name: &'static str,
    /// CSS `font-family` stack.
    pub value: &'static str,
}

/// A language a post can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code.
    pub code: &'static str,
    /// English name followed by the native name.
    pub name: &'static str,
    /// Writing direction.
    pub direction: TextDirection,
}

pub const BLOG_FONTS: &[BlogFont] = &[
    BlogFont {
        name: "Default (System)",
        value: "system-ui, -apple-system, sans-serif",
    },
    BlogFont {
        name: "Serif (Georgia)",
        value: "Georgia, serif",
    },
    BlogFont {
        name: "Sans-Serif (Arial)",
        value: "Arial, sans-serif",
    },
    BlogFont {
        name: "Monospace (Courier)",
        value: "\"Courier New\", monospace",
    },
    BlogFont {
        name: "Playfair Display",
        value: "\"Playfair Display\", serif",
    },
    BlogFont {
        name: "Lora",
        value: "Lora, serif",
    },
    BlogFont {
        name: "Merriweather",
        value: "Merriweather, serif",
    },
    BlogFont {
        name: "Open Sans",
        value: "\"Open Sans\", sans-serif",
    },
    BlogFont {
        name: "Roboto",
        value: "Roboto, sans-serif",
    },
    BlogFont {
        name: "PT Serif",
        value: "\"PT Serif\", serif",
    },
];

const fn lang(code: &'static str, name: &'static str, direction: TextDirection) -> Language {
    Language {
        code,
        name,
        direction,
    }
}

pub const SUPPORTED_LANGUAGES: &[Language] = &[
    lang("en", "English", TextDirection::Ltr),
    lang("hi", "Hindi (हिन्दी)", TextDirection::Ltr),
    lang("ar", "Arabic (العربية)", TextDirection::Rtl),
    lang("zh", "Chinese (中文)", TextDirection::Ltr),
    lang("es", "Spanish (Español)", TextDirection::Ltr),
    lang("fr", "French (Français)", TextDirection::Ltr),
    lang("de", "German (Deutsch)", TextDirection::Ltr),
    lang("ja", "Japanese (日本語)", TextDirection::Ltr),
    lang("ko", "Korean (한국어)", TextDirection::Ltr),
    lang("pt", "Portuguese (Português)", TextDirection::Ltr),
    lang("ru", "Russian (Русский)", TextDirection::Ltr),
    lang("bn", "Bengali (বাংলা)", TextDirection::Ltr),
    lang("ur", "Urdu (اردو)", TextDirection::Rtl),
    lang("he", "Hebrew (עברית)", TextDirection::Rtl),
];

/// Look up a supported language by its code (case-insensitive).
///
/// # Examples
///
/// ```
/// use blogmark_renderer::{TextDirection, catalog::language};
///
/// assert_eq!(language("AR").map(|l| l.direction), Some(TextDirection::Rtl));
/// assert!(language("xx").is_none());
/// ```
#[must_use]
pub fn language(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_direction_attributes() {
        assert_eq!(TextDirection::Rtl.as_str(), "rtl");
        assert_eq!(TextDirection::Rtl.align_class(), "text-right");
        assert_eq!(TextDirection::Ltr.as_str(), "ltr");
        assert_eq!(TextDirection::Ltr.align_class(), "text-left");
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("RTL".parse::<TextDirection>(), Ok(TextDirection::Rtl));
        assert_eq!("ltr".parse::<TextDirection>(), Ok(TextDirection::Ltr));
        assert!("up".parse::<TextDirection>().is_err());
    }

    #[test]
    fn test_rtl_languages() {
        let rtl: Vec<&str> = SUPPORTED_LANGUAGES
            .iter()
            .filter(|l| l.direction == TextDirection::Rtl)
            .map(|l| l.code)
            .collect();
        assert_eq!(rtl, vec!["ar", "ur", "he"]);
    }

    #[test]
    fn test_language_lookup() {
        let hebrew = language("he").unwrap();
        assert_eq!(hebrew.name, "Hebrew (עברית)");
        assert_eq!(language("En").map(|l| l.code), Some("en"));
        assert_eq!(language(""), None);
    }

    #[test]
    fn test_font_catalog() {
        assert_eq!(BLOG_FONTS.len(), 10);
        assert_eq!(BLOG_FONTS[0].value, "system-ui, -apple-system, sans-serif");
        assert!(BLOG_FONTS.iter().any(|f| f.value == "\"PT Serif\", serif"));
    }
}
