use crate::animation::NOTE_ENTRANCE;
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, NoteGrid, NoteItem, NoteMeta, Spinner,
};
use crate::models::{Note, NoteAdded};
use crate::state::notes::{detail_ack, unsynced_ack, ListPhase, NotesState};
use crate::state::AppContext;
use crate::util::{clear_timeout, now_iso, provisional_id, set_timeout};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pause between attach and the first GET so the loading state is visible.
pub(crate) const INITIAL_LOAD_DELAY_MS: i32 = 2000;

#[component]
pub fn NoteList() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api_client = app_state.0.api_client;
    let acks = app_state.0.acks;

    let state: RwSignal<NotesState> = RwSignal::new(NotesState::new());
    let refreshing: RwSignal<bool> = RwSignal::new(false);

    let subscription = app_state.0.note_bus.subscribe(move |added: &NoteAdded| {
        let added = added.clone();
        let _ = state
            .try_maybe_update(|s| s.tracked(|s| s.append(added, now_iso(), provisional_id())));
    });

    let load_timer = {
        let api_client = api_client.get_untracked();
        set_timeout(INITIAL_LOAD_DELAY_MS, move || {
            spawn_local(async move {
                let result = api_client.list_notes().await;
                match &result {
                    Ok(notes) => log::info!("fetched {} notes", notes.len()),
                    Err(e) => log::error!("Error fetching notes: {e}"),
                }
                let _ = state.try_maybe_update(|s| s.tracked(|s| s.apply_initial_load(result)));
            });
        })
    };

    on_cleanup(move || {
        drop(subscription);
        if let Some(id) = load_timer {
            clear_timeout(id);
        }
    });

    let on_delete = move |note: Note| {
        if note.is_provisional() {
            acks.show(unsynced_ack());
            return;
        }

        let api_client = api_client.get_untracked();
        spawn_local(async move {
            let result = api_client.delete_note(&note.id).await;
            match &result {
                Ok(()) => log::info!("Note deleted successfully: {}", note.id),
                Err(e) => log::error!("Error deleting note {}: {e}", note.id),
            }
            let ack = state.try_maybe_update(|s| s.tracked(|s| s.apply_delete(&note.id, result)));
            if let Some(ack) = ack {
                acks.show(ack);
            }
        });
    };

    let on_detail = move |note: Note| {
        if note.is_provisional() {
            acks.show(unsynced_ack());
            return;
        }

        let api_client = api_client.get_untracked();
        spawn_local(async move {
            let result = api_client.get_note(&note.id).await;
            if let Err(e) = &result {
                log::error!("Error fetching single note {}: {e}", note.id);
            }
            acks.show(detail_ack(result));
        });
    };

    let on_refresh = move |_| {
        if refreshing.get_untracked() {
            return;
        }

        let api_client = api_client.get_untracked();
        refreshing.set(true);
        spawn_local(async move {
            let result = api_client.list_notes().await;
            if let Err(e) = &result {
                log::error!("Error refreshing notes: {e}");
            }
            let ack = state.try_maybe_update(|s| s.tracked(|s| s.apply_refresh(result)));
            if let Some(Some(ack)) = ack {
                acks.show(ack);
            }
            let _ = refreshing.try_set(false);
        });
    };

    let on_delete = Callback::new(on_delete);
    let on_detail = Callback::new(on_detail);

    view! {
        <Card>
            <CardHeader>
                <div class="space-y-1">
                    <CardTitle>"Notes"</CardTitle>
                    <CardDescription>
                        {move || state.with(|s| match s.phase() {
                            ListPhase::Loaded => format!("{} total", s.len()),
                            ListPhase::Loading => "Loading notes...".to_string(),
                            ListPhase::Error(_) => "Unavailable".to_string(),
                        })}
                    </CardDescription>
                </div>

                <Show when=move || state.with(|s| s.is_loaded()) fallback=|| ().into_view()>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        attr:disabled=move || refreshing.get()
                        on:click=on_refresh
                    >
                        <span class="inline-flex items-center gap-2">
                            <Show when=move || refreshing.get() fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            {move || if refreshing.get() { "Refreshing" } else { "Refresh" }}
                        </span>
                    </Button>
                </Show>
            </CardHeader>

            <CardContent>
                // Re-renders the whole list whenever `revision` moves, which also
                // replays the entrance animation. Failed operations leave it alone.
                {move || {
                    let (phase, notes, revision) =
                        state.with(|s| (s.phase().clone(), s.notes().to_vec(), s.revision()));
                    match phase {
                        ListPhase::Loading => view! {
                            <div id="loadingIndicator" class="flex justify-center py-16">
                                <Spinner class="size-12 text-sky-500" />
                            </div>
                        }
                        .into_any(),
                        ListPhase::Error(message) => view! {
                            <Alert class="border-destructive/30">
                                <AlertDescription class="text-destructive">{message}</AlertDescription>
                            </Alert>
                        }
                        .into_any(),
                        ListPhase::Loaded if notes.is_empty() => view! {
                            <div class="text-xs text-muted-foreground">"No notes yet."</div>
                        }
                        .into_any(),
                        ListPhase::Loaded => view! {
                            <NoteGrid attr:id="notes-container" attr:data-revision=revision.to_string()>
                                {notes
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, note)| view! {
                                        <NoteCard note=note index=index on_delete=on_delete on_detail=on_detail />
                                    })
                                    .collect_view()}
                            </NoteGrid>
                        }
                        .into_any(),
                    }
                }}
            </CardContent>
        </Card>
    }
}

#[component]
fn NoteCard(
    note: Note,
    index: usize,
    on_delete: Callback<Note>,
    on_detail: Callback<Note>,
) -> impl IntoView {
    let pending = note.is_provisional();
    let for_delete = note.clone();
    let for_detail = note.clone();

    view! {
        <NoteItem attr:style=NOTE_ENTRANCE.style_for(index)>
            <h2 class="text-lg font-semibold break-words">{note.title}</h2>
            <p class="whitespace-pre-wrap break-words text-sm">{note.body}</p>
            <NoteMeta>"Created at: " {note.created_at}</NoteMeta>
            <NoteMeta>"Archived: " {note.archived.to_string()}</NoteMeta>
            <Show when=move || pending fallback=|| ().into_view()>
                <NoteMeta class="italic">"Not synced yet"</NoteMeta>
            </Show>
            <div class="mt-2 flex gap-2">
                <Button
                    variant=ButtonVariant::Destructive
                    size=ButtonSize::Sm
                    attr:data-note-id=note.id.clone()
                    on:click=move |_| on_delete.run(for_delete.clone())
                >
                    "Delete Note"
                </Button>
                <Button
                    variant=ButtonVariant::Highlight
                    size=ButtonSize::Sm
                    attr:data-note-id=note.id
                    on:click=move |_| on_detail.run(for_detail.clone())
                >
                    "View Detail"
                </Button>
            </div>
        </NoteItem>
    }
}
