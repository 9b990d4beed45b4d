//! Capability trait for the TgService API surface.
//!
//! One conforming implementation exists ([`crate::client::TgServiceClient`]);
//! keeping the contract behind a trait lets callers stub the gateway in their
//! own tests without a network.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::api::{Resource, SendMessage};
use crate::error::Result;
use crate::types::Params;

/// The TgService management and messaging API.
///
/// The five core operations cover the whole catalogue; the per-resource
/// methods are provided wrappers that fix the resource and marshal their
/// arguments.
#[async_trait]
pub trait TgServiceApi {
    /// List all entries of a resource (`GET {resource}`).
    async fn list(&self, resource: Resource) -> Result<Option<Value>>;

    /// Fetch one entry by id (`GET {resource}/{id}`).
    async fn get_by_id(&self, resource: Resource, id: u64) -> Result<Option<Value>>;

    /// Update fields of one entry (`PATCH {resource}/{id}`).
    async fn edit(&self, resource: Resource, id: u64, fields: Params) -> Result<Option<Value>>;

    /// Create an entry (`POST {resource}`) after validating the resource's
    /// required fields locally.
    async fn create(&self, resource: Resource, fields: Params) -> Result<Option<Value>>;

    /// Send a message through a bot or channel (`POST send/message`) after
    /// validating the either/or target and content pairs locally.
    async fn send_message(&self, message: SendMessage) -> Result<Option<Value>>;

    /// Get all bots, or one bot by id.
    async fn get_bots(&self, id: Option<u64>) -> Result<Option<Value>> {
        match id {
            Some(id) => self.get_by_id(Resource::Bots, id).await,
            None => self.list(Resource::Bots).await,
        }
    }

    /// Get all templates, or one template by id.
    async fn get_templates(&self, id: Option<u64>) -> Result<Option<Value>> {
        match id {
            Some(id) => self.get_by_id(Resource::Templates, id).await,
            None => self.list(Resource::Templates).await,
        }
    }

    /// Get all hooks, or one hook by id.
    async fn get_hooks(&self, id: Option<u64>) -> Result<Option<Value>> {
        match id {
            Some(id) => self.get_by_id(Resource::Hooks, id).await,
            None => self.list(Resource::Hooks).await,
        }
    }

    /// Get all channels, or one channel by id.
    async fn get_channels(&self, id: Option<u64>) -> Result<Option<Value>> {
        match id {
            Some(id) => self.get_by_id(Resource::Channels, id).await,
            None => self.list(Resource::Channels).await,
        }
    }

    /// Edit a bot.
    async fn edit_bots(&self, id: u64, fields: Params) -> Result<Option<Value>> {
        self.edit(Resource::Bots, id, fields).await
    }

    /// Edit a template.
    async fn edit_templates(&self, id: u64, fields: Params) -> Result<Option<Value>> {
        self.edit(Resource::Templates, id, fields).await
    }

    /// Edit a hook.
    async fn edit_hooks(&self, id: u64, fields: Params) -> Result<Option<Value>> {
        self.edit(Resource::Hooks, id, fields).await
    }

    /// Edit a channel.
    async fn edit_channels(&self, id: u64, fields: Params) -> Result<Option<Value>> {
        self.edit(Resource::Channels, id, fields).await
    }

    /// Create a bot from its name and Telegram token.
    async fn create_bot(&self, name: &str, token: &str) -> Result<Option<Value>> {
        let mut fields = Params::new();
        fields.insert("name".to_string(), json!(name));
        fields.insert("token".to_string(), json!(token));
        self.create(Resource::Bots, fields).await
    }

    /// Create a message template.
    async fn create_template(&self, name: &str, text: &str) -> Result<Option<Value>> {
        let mut fields = Params::new();
        fields.insert("name".to_string(), json!(name));
        fields.insert("text".to_string(), json!(text));
        self.create(Resource::Templates, fields).await
    }

    /// Create a web hook bound to a bot.
    async fn create_hook(&self, name: &str, url: &str, bot_id: u64) -> Result<Option<Value>> {
        let mut fields = Params::new();
        fields.insert("name".to_string(), json!(name));
        fields.insert("url".to_string(), json!(url));
        fields.insert("id_bot".to_string(), json!(bot_id));
        self.create(Resource::Hooks, fields).await
    }

    /// Create a channel bound to a bot and chat.
    async fn create_channel(&self, name: &str, bot_id: u64, chat_id: u64) -> Result<Option<Value>> {
        let mut fields = Params::new();
        fields.insert("name".to_string(), json!(name));
        fields.insert("bot_id".to_string(), json!(bot_id));
        fields.insert("chat_id".to_string(), json!(chat_id));
        self.create(Resource::Channels, fields).await
    }
}
