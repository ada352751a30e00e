use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex items-start justify-between gap-2 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardDescription, p, "text-muted-foreground text-sm"}
    clx! {CardContent, div, "px-6"}

    // Notes grid and one note per cell.
    clx! {NoteGrid, ul, "grid grid-cols-[repeat(auto-fill,minmax(300px,1fr))] gap-5"}
    clx! {NoteItem, li, "flex flex-col gap-2 rounded-lg border-2 border-white/80 bg-zinc-950 p-5 text-zinc-200 shadow-lg transition-transform hover:-translate-y-1"}
    clx! {NoteMeta, p, "text-xs text-muted-foreground"}
}

pub use components::*;
