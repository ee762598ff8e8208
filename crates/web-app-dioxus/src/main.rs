#![warn(clippy::pedantic)]

use std::{rc::Rc, sync::Arc};

use dioxus::prelude::*;
use futures_util::StreamExt;
use log::error;
use rand::{SeedableRng, rngs::StdRng};

use quickfit_domain as domain;
use quickfit_web_app as web_app;
use quickfit_web_app::{connectivity::ConnectivityObserver, service_worker::AssetCacheRegistrar};

use component::navbar::Navbar;
use page::{log::Log, not_found::NotFound, workout::Workout};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Workout {},
    #[route("/log")]
    Log {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// State of the workout screen, owned by [`App`] and shared with its descendants as context.
type View = Signal<domain::WorkoutView<'static, StdRng>>;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css";
const FONTAWESOME_CSS: &str =
    "https://cdn.jsdelivr.net/npm/@fortawesome/fontawesome-free@6.6.0/css/all.min.css";

fn main() {
    let settings = web_app::Settings::default();
    init_logging(&settings);
    apply_theme(settings.current_theme());
    web_app::service_worker::ServiceWorker.register(settings.service_worker_url);
    dioxus::launch(App);
}

fn init_logging(settings: &web_app::Settings) {
    let _ = web_app::log::init(Arc::new(web_app::log::MemoryLog::new(
        settings.max_log_entries,
    )));
}

fn apply_theme(theme: web_app::Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        error!("failed to access document to apply theme");
        return;
    };
    if let Err(err) = root.set_attribute("data-theme", theme.name()) {
        error!("failed to apply theme: {err:?}");
    }
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        An unexpected error occurred and the application cannot continue.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    let view: View = use_signal(|| {
        let mut view = domain::WorkoutView::new(domain::Catalog::builtin(), StdRng::from_entropy());
        view.on_connectivity_change(web_app::connectivity::Browser.is_offline());
        view
    });
    use_context_provider(|| view);
    let connectivity = use_coroutine(move |mut rx: UnboundedReceiver<bool>| async move {
        let mut view = view;
        while let Some(is_offline) = rx.next().await {
            view.write().on_connectivity_change(is_offline);
        }
    });
    use_hook(move || {
        let tx = connectivity.tx();
        Rc::new(web_app::connectivity::Browser.subscribe(move |is_offline| {
            let _ = tx.unbounded_send(is_offline);
        }))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BULMA_CSS }
        document::Link { rel: "stylesheet", href: FONTAWESOME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-tablet py-4",
            Router::<Route> {}
        }
    }
}
