use crate::components::ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, FieldError, Input, Label,
    Spinner, Textarea,
};
use crate::state::form::{
    creation_outcome, field_hint, validate_body, validate_note, validate_title, BODY_MAX_CHARS,
    INVALID_FORM_MESSAGE, TITLE_MAX_CHARS,
};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn NoteForm() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api_client = app_state.0.api_client;
    let acks = app_state.0.acks;
    let note_bus = app_state.0.note_bus.clone();

    let title: RwSignal<String> = RwSignal::new(String::new());
    let body: RwSignal<String> = RwSignal::new(String::new());
    let title_touched: RwSignal<bool> = RwSignal::new(false);
    let body_touched: RwSignal<bool> = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let submitting: RwSignal<bool> = RwSignal::new(false);

    let title_hint = Memo::new(move |_| field_hint(title_touched.get(), title.with(|t| validate_title(t))));
    let body_hint = Memo::new(move |_| field_hint(body_touched.get(), body.with(|b| validate_body(b))));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }

        let new_note = match validate_note(&title.get_untracked(), &body.get_untracked()) {
            Ok(n) => n,
            Err(e) => {
                log::debug!("note form rejected: {e}");
                error.set(Some(INVALID_FORM_MESSAGE.to_string()));
                return;
            }
        };

        let api_client = api_client.get_untracked();
        let note_bus = note_bus.clone();
        submitting.set(true);

        spawn_local(async move {
            let result = api_client.create_note(&new_note).await;
            match &result {
                Ok(created) => log::info!(
                    "Note created successfully: {}",
                    created.as_ref().map(|n| n.id.as_str()).unwrap_or("<no id>")
                ),
                Err(e) => log::error!("Error creating note: {e}"),
            }

            let (ack, added) = creation_outcome(new_note, &result);
            if let Some(added) = added {
                note_bus.publish(&added);

                // The form may be gone by now; the notification above still counts.
                let _ = title.try_set(String::new());
                let _ = body.try_set(String::new());
                let _ = title_touched.try_set(false);
                let _ = body_touched.try_set(false);
                let _ = error.try_set(None);
            }
            acks.show(ack);
            let _ = submitting.try_set(false);
        });
    };

    view! {
        <Card class="mx-auto w-full max-w-xl">
            <CardHeader class="flex-col">
                <CardTitle>"New note"</CardTitle>
                <CardDescription>"Title up to 25 characters, content up to 500."</CardDescription>
            </CardHeader>

            <CardContent>
                // novalidate: constraint checks run in `validate_note` so the
                // inline message is always the one shown.
                <form class="flex flex-col gap-4" novalidate=true on:submit=on_submit>
                    <div class="flex flex-col gap-2">
                        <Label html_for="title">"Title:"</Label>
                        <Input
                            id="title"
                            name="title"
                            bind_value=title
                            touched=title_touched
                            required=true
                            maxlength=TITLE_MAX_CHARS
                            invalid=Signal::derive(move || title_hint.get().is_some())
                        />
                        <FieldError>{move || title_hint.get()}</FieldError>
                    </div>

                    <div class="flex flex-col gap-2">
                        <Label html_for="body">"Content of Notes:"</Label>
                        <Textarea
                            id="body"
                            name="body"
                            bind_value=body
                            touched=body_touched
                            required=true
                            maxlength=BODY_MAX_CHARS
                            invalid=Signal::derive(move || body_hint.get().is_some())
                        />
                        <FieldError>{move || body_hint.get()}</FieldError>
                    </div>

                    <Button attr:disabled=move || submitting.get()>
                        <span class="inline-flex items-center gap-2">
                            <Show when=move || submitting.get() fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            {move || if submitting.get() { "Adding..." } else { "Add New Note" }}
                        </span>
                    </Button>

                    <FieldError attr:id="error-message">{move || error.get()}</FieldError>
                </form>
            </CardContent>
        </Card>
    }
}
