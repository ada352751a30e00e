use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, NoteMeta, Spinner,
};
use crate::state::notes::{ListPhase, NotesState};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Read-only list of archived notes, fetched each time it is opened.
#[component]
pub fn ArchivedNotes() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let api_client = app_state.0.api_client;

    let open: RwSignal<bool> = RwSignal::new(false);
    let archived: RwSignal<NotesState> = RwSignal::new(NotesState::new());
    let request_id: RwSignal<u64> = RwSignal::new(0);

    let toggle = move |_| {
        if open.get_untracked() {
            open.set(false);
            return;
        }

        open.set(true);
        archived.set(NotesState::new());

        let req_id = request_id.get_untracked().saturating_add(1);
        request_id.set(req_id);

        let api_client = api_client.get_untracked();
        spawn_local(async move {
            let result = api_client.list_archived_notes().await;
            if let Err(e) = &result {
                log::error!("Error fetching archived notes: {e}");
            }

            // Ignore stale responses.
            if request_id.try_get_untracked() != Some(req_id) {
                return;
            }
            let _ = archived.try_maybe_update(|s| s.tracked(|s| s.apply_initial_load(result)));
        });
    };

    view! {
        <Card>
            <CardHeader>
                <div class="space-y-1">
                    <CardTitle>"Archived"</CardTitle>
                    <CardDescription>"Notes archived on the server."</CardDescription>
                </div>
                <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on:click=toggle>
                    {move || if open.get() { "Hide" } else { "Show" }}
                </Button>
            </CardHeader>

            <Show when=move || open.get() fallback=|| ().into_view()>
                <CardContent>
                    {move || {
                        let (phase, notes) =
                            archived.with(|s| (s.phase().clone(), s.notes().to_vec()));
                        match phase {
                            ListPhase::Loading => view! { <Spinner /> }.into_any(),
                            ListPhase::Error(_) => view! {
                                <Alert class="border-destructive/30">
                                    <AlertDescription class="text-destructive">
                                        "Failed to fetch archived notes."
                                    </AlertDescription>
                                </Alert>
                            }
                            .into_any(),
                            ListPhase::Loaded if notes.is_empty() => view! {
                                <div class="text-xs text-muted-foreground">"No archived notes."</div>
                            }
                            .into_any(),
                            ListPhase::Loaded => view! {
                                <ul class="flex flex-col gap-3">
                                    {notes
                                        .into_iter()
                                        .map(|n| view! {
                                            <li class="rounded-md border px-4 py-3">
                                                <div class="text-sm font-medium">{n.title}</div>
                                                <div class="text-xs whitespace-pre-wrap">{n.body}</div>
                                                <NoteMeta>"Created at: " {n.created_at}</NoteMeta>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any(),
                        }
                    }}
                </CardContent>
            </Show>
        </Card>
    }
}
