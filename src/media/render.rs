//! View model produced for each load state.
//!
//! The host turns an [`ImageView`] into real elements; nothing here knows
//! about a particular UI toolkit.

use serde::Serialize;

use crate::media::props::{Dimension, ImageProps, LoadingStrategy};
use crate::media::state::LoadState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opacity {
    Transparent,
    Visible,
}

/// Outer box sized like the image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub class_name: String,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

/// Spinner overlay shown while pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlay {
    pub placeholder: String,
    pub spinner: bool,
}

/// The underlying image element bound to the real source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageElement {
    pub src: String,
    pub alt: String,
    pub loading: LoadingStrategy,
    pub class_name: String,
    pub opacity: Opacity,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageView {
    /// Pending or loaded: container, optional overlay, image.
    Frame {
        container: Container,
        overlay: Option<Overlay>,
        image: ImageElement,
    },
    /// Errored: fixed-size box with a message and no image element.
    ErrorPlaceholder {
        class_name: String,
        width: Option<Dimension>,
        height: Option<Dimension>,
        message: String,
    },
}

impl ImageView {
    pub fn has_overlay(&self) -> bool {
        matches!(self, ImageView::Frame { overlay: Some(_), .. })
    }

    pub fn image(&self) -> Option<&ImageElement> {
        match self {
            ImageView::Frame { image, .. } => Some(image),
            ImageView::ErrorPlaceholder { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ImageView::ErrorPlaceholder { .. })
    }
}

/// Render `props` for `state`.
pub fn render(props: &ImageProps, state: LoadState, error_message: &str) -> ImageView {
    if state == LoadState::Errored {
        return ImageView::ErrorPlaceholder {
            class_name: props.class_name.clone(),
            width: props.width.clone(),
            height: props.height.clone(),
            message: error_message.to_string(),
        };
    }

    let loaded = state == LoadState::Loaded;
    let overlay = (!loaded).then(|| Overlay {
        placeholder: props.placeholder.clone(),
        spinner: true,
    });

    ImageView::Frame {
        container: Container {
            class_name: props.class_name.clone(),
            width: props.width.clone(),
            height: props.height.clone(),
        },
        overlay,
        image: ImageElement {
            src: props.src.clone(),
            alt: props.alt.clone(),
            loading: props.loading,
            class_name: props.class_name.clone(),
            opacity: if loaded { Opacity::Visible } else { Opacity::Transparent },
            width: props.width.clone(),
            height: props.height.clone(),
        },
    }
}
