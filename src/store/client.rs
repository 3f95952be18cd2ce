use crate::{
    models::{Client, ClientUpdate},
    store::{ErrorPayload, Phase},
};

/// What the dashboard knows about the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    pub client_info: Option<Client>,
    pub loading: bool,
    pub error: Option<ErrorPayload>,
}

/// The transitions of [ClientState].
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    FetchInfo(Phase<Client>),
    UpdatePreferences(Phase<ClientUpdate>),
}

impl ClientState {
    pub fn reduce(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::FetchInfo(Phase::Pending) => {
                self.loading = true;
                self.error = None;
            }
            ClientEvent::FetchInfo(Phase::Fulfilled(client)) => {
                self.loading = false;
                self.client_info = Some(client);
            }
            ClientEvent::FetchInfo(Phase::Rejected(error)) => {
                self.loading = false;
                self.error = Some(error);
            }
            // A preferences update leaves `loading` alone so the balance stays on screen.
            ClientEvent::UpdatePreferences(Phase::Pending) => {
                self.error = None;
            }
            ClientEvent::UpdatePreferences(Phase::Fulfilled(update)) => {
                if let Some(client) = self.client_info.as_mut() {
                    client.merge(update);
                }
            }
            ClientEvent::UpdatePreferences(Phase::Rejected(error)) => {
                self.error = Some(error);
            }
        }
    }
}
