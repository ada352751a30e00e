mod ack_host;
mod archived;
mod note_form;
mod note_list;

pub use ack_host::AckHost;
pub use archived::ArchivedNotes;
pub use note_form::NoteForm;
pub use note_list::NoteList;

use leptos::prelude::*;

#[component]
pub fn NotesPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background text-foreground">
            <div class="mx-auto flex w-full max-w-[1080px] flex-col gap-8 px-4 py-8">
                <header class="space-y-1">
                    <h1 class="text-xl font-semibold">"Notes"</h1>
                    <p class="text-xs text-muted-foreground">"Write it down before it slips away."</p>
                </header>

                <NoteForm />
                <NoteList />
                <ArchivedNotes />
            </div>
            <Footer />
            <AckHost />
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-border py-6 text-center text-xs text-muted-foreground">
            "Notes App"
        </footer>
    }
}
