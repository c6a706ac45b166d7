//! Typography tokens for theming

use serde::{Deserialize, Serialize};

/// Font weight
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// Numeric weight (CSS / OpenType scale)
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// A concrete font: resolved family, point size and weight
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
}

/// One entry of the type scale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub line_height: f32,
}

impl TextStyle {
    pub const fn new(size: f32, weight: FontWeight, line_height: f32) -> Self {
        Self {
            size,
            weight,
            line_height,
        }
    }
}

/// Typography token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyToken {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption1,
    Caption2,
}

/// Type scale plus the default font family
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub font_family: String,
    pub mono_family: String,
    pub large_title: TextStyle,
    pub title1: TextStyle,
    pub title2: TextStyle,
    pub title3: TextStyle,
    pub headline: TextStyle,
    pub body: TextStyle,
    pub callout: TextStyle,
    pub subheadline: TextStyle,
    pub footnote: TextStyle,
    pub caption1: TextStyle,
    pub caption2: TextStyle,
}

impl Typography {
    /// Get a text style by token key
    pub fn get(&self, token: TypographyToken) -> &TextStyle {
        match token {
            TypographyToken::LargeTitle => &self.large_title,
            TypographyToken::Title1 => &self.title1,
            TypographyToken::Title2 => &self.title2,
            TypographyToken::Title3 => &self.title3,
            TypographyToken::Headline => &self.headline,
            TypographyToken::Body => &self.body,
            TypographyToken::Callout => &self.callout,
            TypographyToken::Subheadline => &self.subheadline,
            TypographyToken::Footnote => &self.footnote,
            TypographyToken::Caption1 => &self.caption1,
            TypographyToken::Caption2 => &self.caption2,
        }
    }

    /// Concrete font for a text style in the default family
    pub fn font(&self, token: TypographyToken) -> Font {
        let style = self.get(token);
        Font {
            family: self.font_family.clone(),
            size: style.size,
            weight: style.weight,
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        use FontWeight::*;
        Self {
            font_family: "system-ui".to_string(),
            mono_family: "monospace".to_string(),
            large_title: TextStyle::new(34.0, Bold, 41.0),
            title1: TextStyle::new(28.0, Bold, 34.0),
            title2: TextStyle::new(22.0, Semibold, 28.0),
            title3: TextStyle::new(20.0, Semibold, 25.0),
            headline: TextStyle::new(17.0, Semibold, 22.0),
            body: TextStyle::new(17.0, Regular, 22.0),
            callout: TextStyle::new(16.0, Regular, 21.0),
            subheadline: TextStyle::new(15.0, Regular, 20.0),
            footnote: TextStyle::new(13.0, Regular, 18.0),
            caption1: TextStyle::new(12.0, Regular, 16.0),
            caption2: TextStyle::new(11.0, Regular, 13.0),
        }
    }
}
