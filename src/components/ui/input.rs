use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

const FIELD_CLASS: &str = "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground border-input flex w-full min-w-0 rounded-md border bg-white px-3 py-2 text-base text-zinc-800 shadow-xs transition-[color,box-shadow] outline-none disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2 aria-invalid:border-destructive aria-invalid:ring-destructive/20";

// Manual value wiring instead of `bind:value`, which has moved around
// between Leptos releases.
fn read_value(ev: &web_sys::Event) -> Option<String> {
    let target = ev.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] maxlength: Option<usize>,
    #[prop(into)] bind_value: RwSignal<String>,
    /// Flipped to true on the first keystroke.
    #[prop(optional)] touched: Option<RwSignal<bool>>,
    #[prop(into, default = Signal::derive(|| false))] invalid: Signal<bool>,
) -> impl IntoView {
    let merged_class = tw_merge!(FIELD_CLASS, "h-9", class);

    let on_input = move |ev: web_sys::Event| {
        if let Some(v) = read_value(&ev) {
            bind_value.set(v);
        }
        if let Some(t) = touched {
            t.set(true);
        }
    };

    view! {
        <input
            data-name="Input"
            type=r#type
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            required=required
            maxlength=maxlength.map(|m| m.to_string())
            aria-invalid=move || invalid.get().to_string()
            prop:value=move || bind_value.get()
            on:input=on_input
        />
    }
}

#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] maxlength: Option<usize>,
    #[prop(default = 4)] rows: u32,
    #[prop(into)] bind_value: RwSignal<String>,
    #[prop(optional)] touched: Option<RwSignal<bool>>,
    #[prop(into, default = Signal::derive(|| false))] invalid: Signal<bool>,
) -> impl IntoView {
    let merged_class = tw_merge!(FIELD_CLASS, "min-h-24 resize-y", class);

    let on_input = move |ev: web_sys::Event| {
        if let Some(v) = read_value(&ev) {
            bind_value.set(v);
        }
        if let Some(t) = touched {
            t.set(true);
        }
    };

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            rows=rows.to_string()
            required=required
            maxlength=maxlength.map(|m| m.to_string())
            aria-invalid=move || invalid.get().to_string()
            prop:value=move || bind_value.get()
            on:input=on_input
        ></textarea>
    }
}
