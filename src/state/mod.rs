pub(crate) mod ack;
pub(crate) mod form;
pub(crate) mod notes;

use crate::api::ApiClient;
use crate::events::NoteBus;
use crate::state::ack::AckCenter;
use leptos::prelude::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// Form → list "note added" channel.
    pub note_bus: NoteBus,

    pub acks: AckCenter,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_client(ApiClient::from_env())
    }

    pub fn with_client(api_client: ApiClient) -> Self {
        Self {
            api_client: RwSignal::new(api_client),
            note_bus: NoteBus::new(),
            acks: AckCenter::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
