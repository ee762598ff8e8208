use log::{debug, error};
use wasm_bindgen::{JsCast, closure::Closure};

/// Source of network reachability transitions.
pub trait ConnectivityObserver {
    type Subscription;

    fn is_offline(&self) -> bool;

    /// Calls `handler` with the new offline state on every transition until the returned
    /// subscription is dropped.
    fn subscribe(&self, handler: impl FnMut(bool) + 'static) -> Self::Subscription;
}

/// Observes the `online` and `offline` events of the browser window.
pub struct Browser;

impl ConnectivityObserver for Browser {
    type Subscription = Subscription;

    fn is_offline(&self) -> bool {
        web_sys::window().is_some_and(|window| !window.navigator().on_line())
    }

    fn subscribe(&self, mut handler: impl FnMut(bool) + 'static) -> Subscription {
        let Some(window) = web_sys::window() else {
            error!("failed to access window to observe connectivity");
            return Subscription { listener: None };
        };
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            handler(Browser.is_offline());
        });
        for event in EVENTS {
            if let Err(err) =
                window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                error!("failed to listen for {event} events: {err:?}");
            }
        }
        debug!("observing connectivity");
        Subscription {
            listener: Some((window, closure)),
        }
    }
}

const EVENTS: [&str; 2] = ["online", "offline"];

/// Removes the event listeners when dropped.
pub struct Subscription {
    listener: Option<(web_sys::Window, Closure<dyn FnMut(web_sys::Event)>)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some((window, closure)) = self.listener.take() {
            for event in EVENTS {
                let _ = window
                    .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
            debug!("stopped observing connectivity");
        }
    }
}
