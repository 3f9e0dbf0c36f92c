//! Shared application state for HTTP handlers.

use std::sync::Arc;

use secrecy::SecretString;

use herald_core::session::{GuildBinding, SessionLifecycle, SessionTracker};
use herald_infra::discord::DiscordClient;
use herald_infra::store::JsonRecordStore;
use herald_types::config::HeraldConfig;

use crate::gate::CommandGate;
use crate::http::verify::SignatureVerifier;

/// The lifecycle wired to its production adapters.
pub type Lifecycle = SessionLifecycle<JsonRecordStore, DiscordClient>;

#[derive(Clone)]
pub struct AppState {
    pub lifecycle: Arc<Lifecycle>,
    pub discord: DiscordClient,
    pub gate: CommandGate,
    pub verifier: SignatureVerifier,
}

impl AppState {
    /// Wire up the full service: record store, tracker, Discord client,
    /// permission gate, and signature verifier.
    ///
    /// A corrupt record file is fatal here; the operator must inspect or
    /// remove it before the service will start.
    pub async fn init(config: &HeraldConfig, token: SecretString) -> anyhow::Result<Self> {
        let verifier = SignatureVerifier::from_hex(&config.public_key)?;
        let discord = DiscordClient::new(token, config.application_id);

        let store = JsonRecordStore::new(&config.data_file);
        let tracker = SessionTracker::load(store).await?;

        let binding = GuildBinding {
            guild: config.guild_id,
            channel: config.session_channel_id,
            ping_role: config.ping_role_id,
        };
        let lifecycle = Arc::new(SessionLifecycle::new(
            discord.clone(),
            tracker,
            binding,
            config.announcements.clone(),
        ));

        Ok(Self {
            lifecycle,
            discord,
            gate: CommandGate::new(config.manager_role_id),
            verifier,
        })
    }
}
