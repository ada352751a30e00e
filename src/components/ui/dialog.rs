use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {DialogBackdrop, div, "fixed inset-0 z-50 flex items-center justify-center bg-black/40 px-4"}
    clx! {DialogPanel, div, "w-full max-w-sm rounded-2xl border border-border bg-background p-6 shadow-lg"}
    clx! {DialogHeader, div, "flex flex-col items-center gap-2 text-center"}
    clx! {DialogTitle, h3, "text-lg leading-none font-semibold"}
    clx! {DialogDescription, div, "text-muted-foreground text-sm space-y-1"}
    clx! {DialogFooter, footer, "mt-4 flex justify-center gap-2"}
}

pub use components::*;
