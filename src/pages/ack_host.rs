use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, DialogBackdrop, DialogDescription, DialogFooter,
    DialogHeader, DialogPanel, DialogTitle,
};
use crate::state::ack::{Ack, AckBody, AckMode};
use crate::state::AppContext;
use icons::{Check, X};
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Renders whichever acknowledgment `AckCenter` currently holds.
#[component]
pub fn AckHost() -> impl IntoView {
    let acks = expect_context::<AppContext>().0.acks;

    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && acks.dismiss_by_user() {
            ev.prevent_default();
        }
    });

    view! {
        {move || acks.current().map(|ack| view! { <AckDialog ack=ack /> })}
    }
}

#[component]
fn AckDialog(ack: Ack) -> impl IntoView {
    let acks = expect_context::<AppContext>().0.acks;
    let dismissable = ack.dismissable();
    let mode = ack.mode;

    let icon = match mode {
        AckMode::Success => view! { <Check class="size-10 text-emerald-500" /> }.into_any(),
        AckMode::Error => view! { <X class="size-10 text-destructive" /> }.into_any(),
        AckMode::Info => ().into_any(),
    };

    let body = match ack.body {
        AckBody::Empty => ().into_any(),
        AckBody::Text(text) => view! { <p>{text}</p> }.into_any(),
        AckBody::Detail(note) => view! {
            <p><strong>"Body: "</strong>{note.body}</p>
            <p><strong>"Created at: "</strong>{note.created_at}</p>
            <p><strong>"Archived: "</strong>{note.archived.to_string()}</p>
        }
        .into_any(),
    };

    let close_label = if mode == AckMode::Info { "Close" } else { "OK" };

    view! {
        <DialogBackdrop
            attr:data-mode=mode.to_string()
            on:click=move |_| {
                acks.dismiss_by_user();
            }
        >
            <DialogPanel attr:role="dialog" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <DialogHeader>
                    {icon}
                    <DialogTitle>{ack.title}</DialogTitle>
                </DialogHeader>
                <DialogDescription class="mt-3">{body}</DialogDescription>
                <Show when=move || dismissable fallback=|| ().into_view()>
                    <DialogFooter>
                        <Button
                            variant=ButtonVariant::Default
                            size=ButtonSize::Sm
                            on:click=move |_| acks.dismiss()
                        >
                            {close_label}
                        </Button>
                    </DialogFooter>
                </Show>
            </DialogPanel>
        </DialogBackdrop>
    }
}
