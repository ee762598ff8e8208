use dioxus::prelude::*;

use quickfit_web_app as web_app;

use crate::component::element::{Color, Container, Message, NoData, Title};

#[component]
pub fn Log() -> Element {
    let entries = web_app::log::entries();
    rsx! {
        Title { title: "Log" }
        Container {
            if entries.is_empty() {
                NoData {}
            }
            for entry in entries.into_iter().rev() {
                Message {
                    color: match entry.level {
                        log::Level::Error => Color::Danger,
                        log::Level::Warn => Color::Warning,
                        log::Level::Info => Color::Primary,
                        log::Level::Debug => Color::Info,
                        log::Level::Trace => Color::Dark,
                    },
                    p { class: "is-size-7", {entry.time} }
                    p { "{entry.message}" }
                }
            }
        }
    }
}
