use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Registers the background script that caches the application assets.
///
/// Registration is fire-and-forget. The outcome is only logged.
pub trait AssetCacheRegistrar {
    fn register(&self, script_url: &str);
}

pub struct ServiceWorker;

impl AssetCacheRegistrar for ServiceWorker {
    fn register(&self, script_url: &str) {
        let Some(window) = web_sys::window() else {
            warn!("failed to get window to register service worker");
            return;
        };
        let navigator = window.navigator();
        if !js_sys::Reflect::has(&navigator, &"serviceWorker".into()).unwrap_or(false) {
            warn!("service workers are not supported");
            return;
        }
        let promise = navigator.service_worker().register(script_url);
        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(registration) => {
                    match registration.dyn_into::<web_sys::ServiceWorkerRegistration>() {
                        Ok(registration) => info!(
                            "service worker registered with scope {}",
                            registration.scope()
                        ),
                        Err(_) => info!("service worker registered"),
                    }
                }
                Err(err) => warn!("failed to register service worker: {err:?}"),
            }
        });
    }
}
