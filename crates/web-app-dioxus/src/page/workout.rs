use dioxus::prelude::*;

use quickfit_domain::{self as domain, Property};

use crate::{
    View,
    component::element::{Block, Color, Dialog, Icon, IconText, Message, Title},
};

#[component]
pub fn Workout() -> Element {
    let mut view = use_context::<View>();
    let (duration, category, workout, selected_exercise, is_offline, title) = {
        let view = view.read();
        (
            view.duration(),
            view.category(),
            view.workout().to_vec(),
            view.selected_exercise().copied(),
            view.is_offline(),
            view.title(),
        )
    };

    rsx! {
        if is_offline {
            Block {
                Message {
                    color: Color::Warning,
                    "You are currently offline. Cached content is available."
                }
            }
        }

        Title { title: "Quick Workout Generator" }

        Block {
            label {
                class: "label",
                IconText { icon: "clock", text: "Workout Duration" }
            }
            div {
                class: "buttons",
                for d in domain::Duration::iter().copied() {
                    button {
                        class: "button",
                        class: if d == duration { "is-link" },
                        onclick: move |_| view.write().set_duration(d),
                        {d.name()}
                    }
                }
            }
        }

        Block {
            label {
                class: "label",
                IconText { icon: "bolt", text: "Workout Goal" }
            }
            div {
                class: "buttons",
                for c in domain::Category::iter().copied() {
                    button {
                        class: "button is-capitalized",
                        class: if c == category { "is-success" },
                        onclick: move |_| view.write().set_category(c),
                        {c.name()}
                    }
                }
            }
        }

        div {
            class: "box has-background-white-ter",
            div {
                class: "is-flex is-justify-content-space-between is-align-items-center mb-4",
                h2 { class: "subtitle is-5 mb-0", "{title}" }
                button {
                    aria_label: "shuffle",
                    class: "button is-primary",
                    onclick: move |_| view.write().regenerate(),
                    Icon { name: "shuffle" }
                }
            }
            for (index, exercise) in workout.into_iter().enumerate() {
                ExerciseRow { key: "{index}", exercise, onclick: move |_| view.write().select_exercise(Some(exercise)) }
            }
        }

        if let Some(exercise) = selected_exercise {
            ExerciseDetails { exercise, close_event: move |_| view.write().select_exercise(None) }
        }
    }
}

#[component]
fn ExerciseRow(exercise: domain::Exercise, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        a {
            class: "box is-flex is-justify-content-space-between is-align-items-center p-3 mb-2",
            onclick,
            div {
                p { class: "has-text-weight-semibold has-text-text", "{exercise.name}" }
                p { class: "is-size-7 has-text-grey", {exercise.summary()} }
            }
            Icon { name: "chevron-right" }
        }
    }
}

#[component]
fn ExerciseDetails(exercise: domain::Exercise, close_event: EventHandler<MouseEvent>) -> Element {
    rsx! {
        Dialog {
            title: rsx! { "{exercise.name}" },
            close_event,
            Block {
                video {
                    class: "exercise-demo",
                    src: exercise.demo_url,
                    controls: true,
                }
            }
            if let Some(equipment) = exercise.equipment {
                p { class: "block is-size-7 has-text-grey", "Equipment: {equipment}" }
            }
            div {
                class: "field is-grouped is-grouped-centered",
                div {
                    class: "control",
                    button {
                        class: "button is-danger",
                        onclick: close_event,
                        "Close"
                    }
                }
            }
        }
    }
}
