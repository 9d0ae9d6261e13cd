//! Inputs of an image instance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::MediaConfig;

/// Loading strategy hint passed through to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingStrategy {
    Eager,
    #[default]
    Lazy,
}

/// A display dimension: pixels or any CSS length the host understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(u32),
    Css(String),
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Px(px)
    }
}

impl From<&str> for Dimension {
    fn from(css: &str) -> Self {
        Dimension::Css(css.to_string())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(px) => write!(f, "{}px", px),
            Dimension::Css(css) => f.write_str(css),
        }
    }
}

/// Image properties. `src` and `alt` are required; the rest have defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub loading: LoadingStrategy,
    #[serde(default)]
    pub width: Option<Dimension>,
    #[serde(default)]
    pub height: Option<Dimension>,
}

fn default_placeholder() -> String {
    MediaConfig::default().placeholder
}

impl ImageProps {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            class_name: String::new(),
            placeholder: default_placeholder(),
            loading: LoadingStrategy::default(),
            width: None,
            height: None,
        }
    }

    /// Like [`new`](Self::new) but takes the placeholder from config.
    pub fn from_config(src: impl Into<String>, alt: impl Into<String>, config: &MediaConfig) -> Self {
        Self::new(src, alt).placeholder(config.placeholder.clone())
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn loading(mut self, loading: LoadingStrategy) -> Self {
        self.loading = loading;
        self
    }

    pub fn size(mut self, width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }

    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }
}
