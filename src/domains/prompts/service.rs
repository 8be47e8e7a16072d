//! Prompt service implementation.
//!
//! The PromptService manages prompt templates and their instantiation. It
//! holds no reference to the document store: prompts only name a document,
//! they never read or check it.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{info, warn};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Service for listing and instantiating prompts.
pub struct PromptService {
    /// Registered prompts, in registration order.
    prompts: Vec<PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with every registered prompt.
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: Vec::new(),
        };
        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template, replacing one with the same name.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        info!("Registering prompt: {}", template.name);
        self.prompts.retain(|existing| existing.name != template.name);
        self.prompts.push(template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .iter()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .iter()
            .find(|template| template.name == name)
            .ok_or_else(|| {
                warn!("Unknown prompt requested: {}", name);
                PromptError::not_found(name)
            })?;

        let arguments = arguments.unwrap_or_default();

        if let Some(missing) = template
            .required_arguments()
            .find(|arg| !arguments.contains_key(*arg))
        {
            return Err(PromptError::missing_argument(missing));
        }

        let content = template.render(&arguments);

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::PromptMessageContent;

    fn doc_args(doc_id: &str) -> Option<HashMap<String, String>> {
        Some(HashMap::from([("doc_id".to_string(), doc_id.to_string())]))
    }

    fn message_text(result: &GetPromptResult) -> &str {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text,
            _ => panic!("Expected text message"),
        }
    }

    #[tokio::test]
    async fn test_prompt_service_listing() {
        let service = PromptService::new();
        let names: Vec<_> = service
            .list_prompts()
            .await
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["format", "summarize"]);
    }

    #[tokio::test]
    async fn test_format_prompt() {
        let service = PromptService::new();
        let result = service.get_prompt("format", doc_args("a.md")).await.unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, PromptMessageRole::User);
        assert!(message_text(&result).contains("<document_id>\na.md\n</document_id>"));
    }

    #[tokio::test]
    async fn test_format_prompt_does_not_validate_doc_id() {
        let service = PromptService::new();
        let result = service
            .get_prompt("format", doc_args("does-not-exist.md"))
            .await
            .unwrap();
        assert!(message_text(&result).contains("does-not-exist.md"));
    }

    #[tokio::test]
    async fn test_summarize_prompt() {
        let service = PromptService::new();
        let result = service.get_prompt("summarize", doc_args("plan.md")).await.unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(message_text(&result).contains("plan.md"));
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let service = PromptService::new();
        let result = service.get_prompt("format", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(ref a)) if a == "doc_id"));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let service = PromptService::new();
        let result = service.get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
