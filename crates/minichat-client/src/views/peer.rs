use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use minichat_core::models::peer_message::PeerMessage;
use minichat_core::models::user_profile::UserSummary;

use crate::api::ChatApi;
use crate::identity::{self, Profile, ProfileProvider, Session};
use crate::views::picker;

pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Conversation with another user.
#[derive(Debug, Default)]
pub struct PeerView {
    pub user: Option<Profile>,
    pub login_url: Option<String>,
    pub users: Vec<UserSummary>,
    pub partner: Option<String>,
    pub messages: Vec<PeerMessage>,
    pub input: String,
}

impl PeerView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establish identity, register it in the directory, then load the
    /// user list.
    pub async fn mount(&mut self, provider: &dyn ProfileProvider, api: &dyn ChatApi) {
        match identity::establish(provider).await {
            Ok(Session::LoggedIn(profile)) => {
                if let Err(e) = api.register_user(&profile).await {
                    error!("failed to register user: {e}");
                }
                self.user = Some(profile);
                self.load_users(api).await;
            }
            Ok(Session::LoginRequired { login_url }) => self.login_url = Some(login_url),
            Err(e) => error!("failed to establish identity: {e}"),
        }
    }

    pub async fn load_users(&mut self, api: &dyn ChatApi) {
        let Some(user) = &self.user else { return };

        match api.list_users().await {
            Ok(users) => self.users = picker::selectable_users(users, &user.user_id),
            Err(e) => error!("failed to load users: {e}"),
        }
    }

    /// Switch partner. The old thread is dropped until the next refresh.
    pub fn select(&mut self, partner_id: &str) {
        self.partner = Some(partner_id.to_string());
        self.messages.clear();
    }

    /// Close the conversation. Polls still in flight find no partner and
    /// are dropped.
    pub fn leave(&mut self) {
        self.partner = None;
        self.messages.clear();
        self.input.clear();
    }

    /// The (user, partner) pair a history fetch would use.
    pub fn thread_key(&self) -> Option<(String, String)> {
        let user = self.user.as_ref()?;
        let partner = self.partner.as_ref()?;
        Some((user.user_id.clone(), partner.clone()))
    }

    /// Replace the thread wholesale if `partner_id` is still selected.
    pub fn apply_history(&mut self, partner_id: &str, messages: Vec<PeerMessage>) {
        if self.partner.as_deref() == Some(partner_id) {
            self.messages = messages;
        }
    }

    pub async fn refresh(&mut self, api: &dyn ChatApi) {
        let Some((user_id, partner_id)) = self.thread_key() else {
            return;
        };

        match api.fetch_history(&user_id, &partner_id).await {
            Ok(messages) => self.apply_history(&partner_id, messages),
            Err(e) => error!("failed to fetch history: {e}"),
        }
    }

    /// Send the input to the selected partner. The input is cleared and the
    /// thread refreshed only when the send succeeds.
    pub async fn send(&mut self, api: &dyn ChatApi) {
        if self.input.trim().is_empty() {
            return;
        }
        let Some((user_id, partner_id)) = self.thread_key() else {
            return;
        };

        let sent = api
            .send_peer_message(&user_id, &partner_id, &self.input)
            .await;
        match sent {
            Ok(_) => {
                self.input.clear();
                self.refresh(api).await;
            }
            Err(e) => error!("failed to send message: {e}"),
        }
    }
}

/// Background history polling for a shared [`PeerView`]. Stops on drop.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    /// Fetch the thread every `period`, starting immediately. Each tick
    /// spawns its own fetch without waiting for earlier ones, so the last
    /// response to arrive wins.
    pub fn spawn(view: Arc<Mutex<PeerView>>, api: Arc<dyn ChatApi>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;

                let Some((user_id, partner_id)) = view.lock().await.thread_key() else {
                    continue;
                };
                debug!(%partner_id, "polling history");

                let view = Arc::clone(&view);
                let api = Arc::clone(&api);
                tokio::spawn(async move {
                    match api.fetch_history(&user_id, &partner_id).await {
                        Ok(messages) => view.lock().await.apply_history(&partner_id, messages),
                        Err(e) => error!("failed to poll history: {e}"),
                    }
                });
            }
        });

        Self { handle }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
