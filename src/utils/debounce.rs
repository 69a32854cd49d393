use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::EventTarget;

/// Listens for `event` on `target`, running `callback` only once the events
/// have stopped for `delay_ms`. Dropping the listener cancels both the
/// subscription and any pending call.
pub fn debounced_listener<F>(
    target: &EventTarget,
    event: &'static str,
    delay_ms: u32,
    callback: F,
) -> EventListener
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(target, event, move |_| {
        let callback = callback.clone();
        // Replacing the handle drops (and cancels) the previous timeout
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || callback()));
    })
}

/// Debounced window `resize` listener; `None` outside a browser
pub fn on_window_resize<F>(delay_ms: u32, callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    Some(debounced_listener(&window, "resize", delay_ms, callback))
}
