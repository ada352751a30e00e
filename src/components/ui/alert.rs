use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
    // Inline form validation message.
    clx! {FieldError, p, "text-xs text-destructive min-h-4"}
}

pub use components::*;
