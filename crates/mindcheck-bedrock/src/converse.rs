use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use aws_sdk_bedrockruntime::Client;
use tracing::info;
use uuid::Uuid;

use mindcheck_core::models::summary::AssessmentSummary;

use crate::error::BedrockError;
use crate::feedback::{bounded, FeedbackProvider};
use crate::prompt;
use crate::tokens::{self, TokenCount};

/// Feedback from a Bedrock-hosted model via the Converse API.
pub struct BedrockFeedback {
    client: Client,
    model_id: String,
    timeout: Duration,
}

impl BedrockFeedback {
    pub fn new(client: Client, model_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            timeout,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl FeedbackProvider for BedrockFeedback {
    async fn feedback(&self, summary: &AssessmentSummary) -> Option<String> {
        let user_message = prompt::build_user_message(summary);
        bounded(
            self.timeout,
            invoke_converse(&self.client, &self.model_id, prompt::SYSTEM_PROMPT, &user_message),
        )
        .await
    }
}

/// Single-turn Converse call. Returns the concatenated response text.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<String, BedrockError> {
    let transaction_id = Uuid::new_v4();
    info!(transaction_id = %transaction_id, model = model_id, "requesting ai feedback");

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .inference_config(
            InferenceConfiguration::builder()
                .max_tokens(prompt::MAX_TOKENS)
                .temperature(prompt::TEMPERATURE)
                .build(),
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let usage = response
        .usage()
        .map(tokens::extract_token_usage)
        .unwrap_or_default();
    log_usage(transaction_id, model_id, usage);

    Ok(text)
}

fn log_usage(transaction_id: Uuid, model_id: &str, usage: TokenCount) {
    let cost_usd = tokens::get_pricing(model_id)
        .map(|p| p.estimate_cost(usage))
        .unwrap_or(0.0);
    info!(
        transaction_id = %transaction_id,
        input_tokens = usage.input,
        output_tokens = usage.output,
        total_tokens = usage.total(),
        cost_usd,
        "ai feedback complete"
    );
}
