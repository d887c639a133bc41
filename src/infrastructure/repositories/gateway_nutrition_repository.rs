use super::nutrition_repository::{EstimatorError, NutritionRepository};
use crate::domain::nutrition::NutritionEstimate;
use async_openai::types::{
    ChatCompletionNamedToolChoice, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, ChatCompletionToolArgs, ChatCompletionToolChoiceOption,
    ChatCompletionToolType, CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
    FunctionName, FunctionObjectArgs,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

const TOOL_NAME: &str = "return_nutrition";

const SYSTEM_PROMPT: &str = "You are a nutrition expert. Given a food item, return estimated \
nutritional values. You MUST call the function provided.";

/// Nutrition estimator backed by an OpenAI-compatible chat completions endpoint.
///
/// The model is forced to answer through the `return_nutrition` tool so the
/// estimate arrives as structured arguments rather than prose.
///
/// Requests go out over plain `reqwest` because the HTTP status decides the
/// error: `async_openai::Client` retries 429 internally and surfaces 402 as an
/// `ApiError` with no status attached.
pub struct GatewayNutritionRepository {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl GatewayNutritionRepository {
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url,
            api_key,
            model,
        })
    }

    fn build_request(&self, food_name: &str) -> Result<CreateChatCompletionRequest, EstimatorError> {
        let function = FunctionObjectArgs::default()
            .name(TOOL_NAME)
            .description("Return the estimated nutritional values for a food item")
            .parameters(json!({
                "type": "object",
                "properties": {
                    "calories": { "type": "number", "description": "Estimated calories (kcal)" },
                    "protein": { "type": "number", "description": "Protein in grams" },
                    "carbs": { "type": "number", "description": "Carbohydrates in grams" },
                    "fat": { "type": "number", "description": "Fat in grams" }
                },
                "required": ["calories", "protein", "carbs", "fat"],
                "additionalProperties": false
            }))
            .build()
            .map_err(|e| EstimatorError::Failed(e.to_string()))?;

        let tool = ChatCompletionToolArgs::default()
            .r#type(ChatCompletionToolType::Function)
            .function(function)
            .build()
            .map_err(|e| EstimatorError::Failed(e.to_string()))?;

        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(SYSTEM_PROMPT)
            .build()
            .map_err(|e| EstimatorError::Failed(e.to_string()))?;

        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(format!("Estimate the nutritional values for: {}", food_name))
            .build()
            .map_err(|e| EstimatorError::Failed(e.to_string()))?;

        CreateChatCompletionRequestArgs::default()
            .model(self.model.clone())
            .messages([system.into(), user.into()])
            .tools(vec![tool])
            .tool_choice(ChatCompletionToolChoiceOption::Named(
                ChatCompletionNamedToolChoice {
                    r#type: ChatCompletionToolType::Function,
                    function: FunctionName {
                        name: TOOL_NAME.to_string(),
                    },
                },
            ))
            .build()
            .map_err(|e| EstimatorError::Failed(e.to_string()))
    }
}

#[async_trait]
impl NutritionRepository for GatewayNutritionRepository {
    async fn estimate(&self, food_name: &str) -> Result<NutritionEstimate, EstimatorError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| EstimatorError::Failed("estimator API key not configured".to_string()))?;

        let request = self.build_request(food_name)?;
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            food_name = food_name,
            "Calling nutrition estimator"
        );

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Nutrition estimator request failed");
                EstimatorError::Failed(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                body = %body,
                "Nutrition estimator returned an error status"
            );
            return Err(classify_status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| EstimatorError::Failed(e.to_string()))?;
        let estimate = parse_completion(&body)?;

        tracing::info!(
            duration_ms = start_time.elapsed().as_millis() as u64,
            calories = %estimate.calories,
            "Nutrition estimate received"
        );

        Ok(estimate)
    }
}

fn classify_status(status: StatusCode) -> EstimatorError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => EstimatorError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => EstimatorError::QuotaExhausted,
        other => EstimatorError::Failed(format!("gateway responded with {}", other)),
    }
}

#[derive(Debug, Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    tool_calls: Vec<CompletionToolCall>,
}

#[derive(Debug, Deserialize)]
struct CompletionToolCall {
    function: CompletionFunction,
}

#[derive(Debug, Deserialize)]
struct CompletionFunction {
    arguments: String,
}

/// Pull the first tool call's arguments out of a completion body
fn parse_completion(body: &str) -> Result<NutritionEstimate, EstimatorError> {
    let completion: CompletionBody = serde_json::from_str(body)
        .map_err(|e| EstimatorError::Failed(format!("malformed completion: {}", e)))?;

    let arguments = completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.tool_calls.into_iter().next())
        .map(|call| call.function.arguments)
        .ok_or_else(|| EstimatorError::Failed("No tool call in response".to_string()))?;

    let estimate: NutritionEstimate = serde_json::from_str(&arguments)
        .map_err(|e| EstimatorError::Failed(format!("malformed tool arguments: {}", e)))?;

    Ok(estimate.clamped())
}
