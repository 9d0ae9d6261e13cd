//! Image loading lifecycle.
//!
//! # Data Flow
//! ```text
//! ImageProps + Callbacks
//!     → loader.rs (ImageLoader, one instance per image)
//!     → host reports load / error
//!     → state.rs (Pending → Loaded | Errored)
//!     → render.rs (ImageView for the current state)
//!
//! url.rs: resolve and cache-bust locators before they become `src`
//! ```
//!
//! # Design Decisions
//! - Outcomes are terminal; there is no retry and no way back to Pending
//! - Failures surface only through the view and the error callback
//! - Callbacks are shared handles so identity survives re-renders

pub mod loader;
pub mod props;
pub mod render;
pub mod state;
pub mod url;

pub use loader::{Callbacks, ErrorHandler, ImageLoader, LoadHandler};
pub use props::{Dimension, ImageProps, LoadingStrategy};
pub use render::{Container, ImageElement, ImageView, Opacity, Overlay};
pub use state::{ErrorEvent, LoadEvent, LoadState};
pub use url::{add_cache_buster, now_millis, resolve_image_url};
