use tracing::warn;

const OVERFLOW_HIDDEN: &str = "hidden";
const OVERFLOW_AUTO: &str = "auto";

/// Something whose CSS `overflow` can be switched.
pub trait ScrollTarget {
    fn set_overflow(&self, value: &str);
}

/// The page's `<body>`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentBody;

impl ScrollTarget for DocumentBody {
    fn set_overflow(&self, value: &str) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            warn!("no document body, overflow left unchanged");
            return;
        };
        if let Err(err) = body.style().set_property("overflow", value) {
            warn!(?err, value, "failed to set body overflow");
        }
    }
}

/// Stops the page behind an overlay from scrolling for as long as it lives.
#[derive(Debug)]
pub struct ScrollLock<T: ScrollTarget> {
    target: T,
    held: bool,
}

impl<T: ScrollTarget> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        target.set_overflow(OVERFLOW_HIDDEN);
        Self { target, held: true }
    }

    pub fn release(&mut self) {
        if self.held {
            self.target.set_overflow(OVERFLOW_AUTO);
            self.held = false;
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl<T: ScrollTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every overflow value written to it.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingTarget(pub Rc<RefCell<Vec<String>>>);

    impl ScrollTarget for RecordingTarget {
        fn set_overflow(&self, value: &str) {
            self.0.borrow_mut().push(value.to_string());
        }
    }

    #[test]
    fn acquire_hides_overflow() {
        let target = RecordingTarget::default();
        let lock = ScrollLock::acquire(target.clone());
        assert!(lock.is_held());
        assert_eq!(*target.0.borrow(), vec!["hidden"]);
    }

    #[test]
    fn release_restores_once() {
        let target = RecordingTarget::default();
        let mut lock = ScrollLock::acquire(target.clone());
        lock.release();
        lock.release();
        drop(lock);
        assert_eq!(*target.0.borrow(), vec!["hidden", "auto"]);
    }

    #[test]
    fn drop_releases() {
        let target = RecordingTarget::default();
        {
            let _lock = ScrollLock::acquire(target.clone());
        }
        assert_eq!(*target.0.borrow(), vec!["hidden", "auto"]);
    }
}
