//! Per-instance image loader.
//!
//! # Responsibilities
//! - Hold props, callbacks and the load state of one image
//! - Apply host load/error events exactly once
//! - Produce the view for the current state
//!
//! # Design Decisions
//! - Only the first outcome counts; later events are dropped
//! - New props or callbacks never reset the state or re-fire callbacks
//! - After `unmount` every event is ignored

use std::fmt;
use std::sync::Arc;

use crate::config::MediaConfig;
use crate::media::props::ImageProps;
use crate::media::render::{render, ImageView};
use crate::media::state::{ErrorEvent, LoadEvent, LoadState};

pub type LoadHandler = Arc<dyn Fn(&LoadEvent) + Send + Sync>;
pub type ErrorHandler = Arc<dyn Fn(&ErrorEvent) + Send + Sync>;

/// Optional caller callbacks.
#[derive(Clone, Default)]
pub struct Callbacks {
    pub on_load: Option<LoadHandler>,
    pub on_error: Option<ErrorHandler>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_load(mut self, f: impl Fn(&LoadEvent) + Send + Sync + 'static) -> Self {
        self.on_load = Some(Arc::new(f));
        self
    }

    pub fn on_error(mut self, f: impl Fn(&ErrorEvent) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(f));
        self
    }

    /// Identity comparison: same handler objects, not equal behavior.
    pub fn same_as(&self, other: &Callbacks) -> bool {
        fn same<T: ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }
        same(&self.on_load, &other.on_load) && same(&self.on_error, &other.on_error)
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_load", &self.on_load.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

#[derive(Debug)]
pub struct ImageLoader {
    props: ImageProps,
    callbacks: Callbacks,
    state: LoadState,
    mounted: bool,
    error_message: String,
}

impl ImageLoader {
    pub fn new(props: ImageProps, callbacks: Callbacks) -> Self {
        Self {
            props,
            callbacks,
            state: LoadState::Pending,
            mounted: true,
            error_message: MediaConfig::default().error_message,
        }
    }

    /// Take the error text from config.
    pub fn with_config(mut self, config: &MediaConfig) -> Self {
        self.error_message = config.error_message.clone();
        self
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn props(&self) -> &ImageProps {
        &self.props
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Host reported a successful load.
    ///
    /// Returns whether the event was applied.
    pub fn handle_load(&mut self, event: &LoadEvent) -> bool {
        if !self.accepts_events() {
            tracing::trace!(src = %self.props.src, state = ?self.state, "Ignoring load event");
            return false;
        }

        self.state = LoadState::Loaded;
        tracing::debug!(src = %self.props.src, "Image loaded");
        if let Some(on_load) = &self.callbacks.on_load {
            on_load(event);
        }
        true
    }

    /// Host reported a load failure. Terminal; no retry.
    ///
    /// Returns whether the event was applied.
    pub fn handle_error(&mut self, event: &ErrorEvent) -> bool {
        if !self.accepts_events() {
            tracing::trace!(src = %self.props.src, state = ?self.state, "Ignoring error event");
            return false;
        }

        self.state = LoadState::Errored;
        tracing::debug!(src = %self.props.src, reason = ?event.reason, "Image failed to load");
        if let Some(on_error) = &self.callbacks.on_error {
            on_error(event);
        }
        true
    }

    /// Replace props. State is kept. Returns whether anything changed.
    pub fn set_props(&mut self, props: ImageProps) -> bool {
        if self.props == props {
            return false;
        }
        self.props = props;
        true
    }

    /// Replace callbacks. State is kept and nothing is invoked.
    ///
    /// Returns `false` when the new handlers are the same objects.
    pub fn set_callbacks(&mut self, callbacks: Callbacks) -> bool {
        if self.callbacks.same_as(&callbacks) {
            return false;
        }
        self.callbacks = callbacks;
        true
    }

    /// Stop applying events. In-flight loads are not aborted.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn render(&self) -> ImageView {
        render(&self.props, self.state, &self.error_message)
    }

    fn accepts_events(&self) -> bool {
        self.mounted && !self.state.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    #[test]
    fn test_load_fires_once_with_event() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_cb = seen.clone();
        let callbacks = Callbacks::new().on_load(move |e| seen_cb.lock().unwrap().push(e.clone()));
        let mut img = ImageLoader::new(ImageProps::new("/a.png", "a"), callbacks);

        let event = LoadEvent {
            src: "/a.png".into(),
            natural_width: Some(10),
            natural_height: Some(20),
        };
        assert!(img.handle_load(&event));
        assert!(!img.handle_load(&event));

        assert_eq!(img.state(), LoadState::Loaded);
        assert_eq!(*seen.lock().unwrap(), vec![event]);
    }

    #[test]
    fn test_outcomes_are_mutually_exclusive() {
        let loads = counter();
        let errors = counter();
        let (l, e) = (loads.clone(), errors.clone());
        let callbacks = Callbacks::new()
            .on_load(move |_| {
                l.fetch_add(1, Ordering::SeqCst);
            })
            .on_error(move |_| {
                e.fetch_add(1, Ordering::SeqCst);
            });
        let mut img = ImageLoader::new(ImageProps::new("/a.png", "a"), callbacks);

        assert!(img.handle_error(&ErrorEvent::new("/a.png")));
        assert!(!img.handle_load(&LoadEvent::new("/a.png")));
        assert!(!img.handle_error(&ErrorEvent::new("/a.png")));

        assert_eq!(img.state(), LoadState::Errored);
        assert_eq!(loads.load(Ordering::SeqCst), 0);
        assert_eq!(errors.load(Ordering::SeqCst), 1);
        assert!(img.render().is_error());
    }

    #[test]
    fn test_no_callbacks_is_fine() {
        let mut img = ImageLoader::new(ImageProps::new("/a.png", "a"), Callbacks::default());
        assert!(img.handle_load(&LoadEvent::new("/a.png")));
        assert!(!img.render().has_overlay());
    }

    #[test]
    fn test_new_props_keep_state() {
        let mut img = ImageLoader::new(ImageProps::new("/a.png", "a"), Callbacks::default());
        img.handle_error(&ErrorEvent::new("/a.png"));

        assert!(!img.set_props(ImageProps::new("/a.png", "a")));
        assert!(img.set_props(ImageProps::new("/b.png", "b")));
        assert_eq!(img.props().src, "/b.png");
        assert_eq!(img.state(), LoadState::Errored);
    }

    #[test]
    fn test_same_callbacks_are_not_replaced() {
        let calls = counter();
        let c = calls.clone();
        let callbacks = Callbacks::new().on_load(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        let mut img = ImageLoader::new(ImageProps::new("/a.png", "a"), callbacks.clone());

        assert!(!img.set_callbacks(callbacks.clone()));
        assert!(img.set_callbacks(Callbacks::new().on_load(|_| {})));
        assert!(img.set_callbacks(callbacks));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        img.handle_load(&LoadEvent::new("/a.png"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unmounted_ignores_events() {
        let calls = counter();
        let c = calls.clone();
        let callbacks = Callbacks::new().on_load(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        let mut img = ImageLoader::new(ImageProps::new("/a.png", "a"), callbacks);
        assert!(img.is_mounted());
        img.unmount();
        assert!(!img.is_mounted());

        assert!(!img.handle_load(&LoadEvent::new("/a.png")));
        assert_eq!(img.state(), LoadState::Pending);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_error_message_from_config() {
        let config = MediaConfig {
            error_message: "Error cargando imagen".into(),
            ..MediaConfig::default()
        };
        let mut img = ImageLoader::new(ImageProps::new("/a.png", "a"), Callbacks::default()).with_config(&config);
        img.handle_error(&ErrorEvent::new("/a.png").with_reason("404"));

        match img.render() {
            ImageView::ErrorPlaceholder { message, .. } => assert_eq!(message, "Error cargando imagen"),
            other => panic!("unexpected view: {:?}", other),
        }
    }
}
