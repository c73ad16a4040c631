//! Scoped event subscriptions: registered on construction, released on drop.

pub trait EventSource {
    type Handler;
    type Token;

    /// Returns `None` when the source refused the registration.
    fn subscribe(&self, event: &'static str, handler: Self::Handler) -> Option<Self::Token>;

    fn unsubscribe(&self, event: &'static str, token: &Self::Token);
}

pub struct ScopedListener<S: EventSource> {
    source: S,
    event: &'static str,
    token: Option<S::Token>,
}

impl<S: EventSource> ScopedListener<S> {
    pub fn attach(source: S, event: &'static str, handler: S::Handler) -> Self {
        let token = source.subscribe(event, handler);
        Self {
            source,
            event,
            token,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.token.is_some()
    }
}

impl<S: EventSource> Drop for ScopedListener<S> {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.source.unsubscribe(self.event, &token);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl EventSource for web_sys::Window {
    type Handler = wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>;
    // The closure itself: the JS side only holds a reference, so it must outlive the registration.
    type Token = Self::Handler;

    fn subscribe(&self, event: &'static str, handler: Self::Handler) -> Option<Self::Token> {
        use wasm_bindgen::JsCast;

        self.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
            .ok()
            .map(|_| handler)
    }

    fn unsubscribe(&self, event: &'static str, token: &Self::Token) {
        use wasm_bindgen::JsCast;

        let _ = self.remove_event_listener_with_callback(event, token.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    #[derive(Default)]
    struct Registry {
        next_id: u32,
        active: HashMap<u32, &'static str>,
        refuse: bool,
    }

    #[derive(Clone, Default)]
    struct CountingSource(Rc<RefCell<Registry>>);

    impl CountingSource {
        fn active(&self) -> usize {
            self.0.borrow().active.len()
        }
    }

    impl EventSource for CountingSource {
        type Handler = Box<dyn FnMut(u32)>;
        type Token = u32;

        fn subscribe(&self, event: &'static str, _handler: Self::Handler) -> Option<u32> {
            let mut registry = self.0.borrow_mut();
            if registry.refuse {
                return None;
            }
            registry.next_id += 1;
            let id = registry.next_id;
            registry.active.insert(id, event);
            Some(id)
        }

        fn unsubscribe(&self, event: &'static str, token: &u32) {
            let removed = self.0.borrow_mut().active.remove(token);
            assert_eq!(removed, Some(event));
        }
    }

    #[test]
    fn drop_releases_the_subscription() {
        let source = CountingSource::default();
        let listener = ScopedListener::attach(source.clone(), "scroll", Box::new(|_: u32| {}));
        assert!(listener.is_attached());
        assert_eq!(source.active(), 1);

        drop(listener);
        assert_eq!(source.active(), 0);
    }

    #[test]
    fn repeated_mounts_do_not_accumulate() {
        let source = CountingSource::default();
        for _ in 0..10 {
            let _listener = ScopedListener::attach(source.clone(), "scroll", Box::new(|_: u32| {}));
            assert_eq!(source.active(), 1);
        }
        assert_eq!(source.active(), 0);
    }

    #[test]
    fn refused_registration_skips_unsubscribe() {
        let source = CountingSource::default();
        source.0.borrow_mut().refuse = true;

        let listener = ScopedListener::attach(source.clone(), "scroll", Box::new(|_: u32| {}));
        assert!(!listener.is_attached());
        drop(listener);
        assert_eq!(source.active(), 0);
    }
}
