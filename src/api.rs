//! Endpoint facade: resource catalogue, validation rules, message requests.
//!
//! The gateway exposes four managed resource families plus message sending.
//! Rather than one hand-written method per resource, the get/edit/create
//! families are driven by the [`Resource`] table; the typed per-resource
//! methods on [`TgServiceApi`] marshal their arguments into it.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};

use crate::client::TgServiceClient;
use crate::error::{ApiError, Result};
use crate::traits::TgServiceApi;
use crate::types::Params;

/// Managed resource families exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Bots,
    Templates,
    Hooks,
    Channels,
}

impl Resource {
    /// Relative collection path on the API.
    pub fn path(self) -> &'static str {
        match self {
            Self::Bots => "bots",
            Self::Templates => "templates",
            Self::Hooks => "hooks",
            Self::Channels => "channels",
        }
    }

    /// Fields that must be present and non-empty when creating an entry.
    ///
    /// Keys are wire names; hooks really do use `id_bot` where channels use
    /// `bot_id`.
    pub fn required_create_fields(self) -> &'static [&'static str] {
        match self {
            Self::Bots => &["name", "token"],
            Self::Templates => &["name", "text"],
            Self::Hooks => &["name", "url", "id_bot"],
            Self::Channels => &["name", "bot_id", "chat_id"],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A message to send through a bot or channel (`POST send/message`).
///
/// The target pair (`bot_id` / `channel_id`) and the content pair
/// (`template_id` / `text`) each need at least one side set; everything else
/// is optional. Unset fields are carried as JSON nulls on the wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendMessage {
    pub bot_id: Option<u64>,
    pub channel_id: Option<u64>,
    pub template_id: Option<u64>,
    pub text: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl SendMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets a bot by id.
    pub fn bot_id(mut self, id: u64) -> Self {
        self.bot_id = Some(id);
        self
    }

    /// Targets a channel by id.
    pub fn channel_id(mut self, id: u64) -> Self {
        self.channel_id = Some(id);
        self
    }

    /// Uses a stored template as the message content.
    pub fn template_id(mut self, id: u64) -> Self {
        self.template_id = Some(id);
        self
    }

    /// Uses literal text as the message content.
    pub fn text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Attaches tags to the message.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.bot_id.unwrap_or(0) == 0 && self.channel_id.unwrap_or(0) == 0 {
            return Err(ApiError::InvalidInput(
                "empty bot_id or channel_id: a message needs a target".to_string(),
            ));
        }
        if self.template_id.unwrap_or(0) == 0 && self.text.as_deref().is_none_or(str::is_empty) {
            return Err(ApiError::InvalidInput(
                "empty template_id or text: a message needs content".to_string(),
            ));
        }
        Ok(())
    }

    fn into_params(self) -> Params {
        let mut params = Params::new();
        params.insert("bot_id".to_string(), json!(self.bot_id));
        params.insert("channel_id".to_string(), json!(self.channel_id));
        params.insert("template_id".to_string(), json!(self.template_id));
        params.insert("text".to_string(), json!(self.text));
        params.insert("tags".to_string(), json!(self.tags));
        params
    }
}

/// True for the values the gateway treats as "not supplied": absent keys,
/// nulls, empty strings and arrays, zero ids.
fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Object(_)) => false,
    }
}

fn ensure_required(resource: Resource, fields: &Params) -> Result<()> {
    let missing: Vec<&str> = resource
        .required_create_fields()
        .iter()
        .copied()
        .filter(|key| is_empty_value(fields.get(*key)))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::InvalidInput(format!(
            "empty required field(s) for {resource} create: {}",
            missing.join(", ")
        )))
    }
}

#[async_trait]
impl TgServiceApi for TgServiceClient {
    async fn list(&self, resource: Resource) -> Result<Option<Value>> {
        self.get(resource.path(), &Params::new()).await
    }

    async fn get_by_id(&self, resource: Resource, id: u64) -> Result<Option<Value>> {
        self.get(&format!("{resource}/{id}"), &Params::new()).await
    }

    async fn edit(&self, resource: Resource, id: u64, fields: Params) -> Result<Option<Value>> {
        self.patch(&format!("{resource}/{id}"), &fields).await
    }

    async fn create(&self, resource: Resource, fields: Params) -> Result<Option<Value>> {
        ensure_required(resource, &fields)?;
        self.post(resource.path(), &fields).await
    }

    async fn send_message(&self, message: SendMessage) -> Result<Option<Value>> {
        message.validate()?;
        self.post("send/message", &message.into_params()).await
    }
}
