//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and its `{{variable}}`
//! renderer.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Names of the arguments that must be supplied.
    pub fn required_arguments(&self) -> impl Iterator<Item = &str> {
        self.arguments
            .iter()
            .filter(|arg| arg.required.unwrap_or(false))
            .map(|arg| arg.name.as_str())
    }

    /// Render the template with the given arguments.
    ///
    /// The template is scanned once, so substituted values are never
    /// expanded again. Placeholders without a value render as empty text.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find("{{") {
            let Some(len) = rest[open + 2..].find("}}") else {
                break;
            };
            result.push_str(&rest[..open]);

            let name = rest[open + 2..open + 2 + len].trim();
            if let Some(value) = arguments.get(name) {
                result.push_str(value);
            }
            rest = &rest[open + 2 + len + 2..];
        }
        result.push_str(rest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Hello, {{name}}!");
        assert_eq!(template.render(&args(&[("name", "World")])), "Hello, World!");
    }

    #[test]
    fn test_repeated_placeholder() {
        let template = PromptTemplate::new("test", None, vec![], "{{x}} and {{ x }}");
        assert_eq!(template.render(&args(&[("x", "a")])), "a and a");
    }

    #[test]
    fn test_missing_value_renders_empty() {
        let template = PromptTemplate::new("test", None, vec![], "Hello{{name}}!");
        assert_eq!(template.render(&HashMap::new()), "Hello!");
    }

    #[test]
    fn test_values_are_not_expanded() {
        let template = PromptTemplate::new("test", None, vec![], "{{a}}{{b}}");
        let rendered = template.render(&args(&[("a", "{{b}}"), ("b", "B")]));
        assert_eq!(rendered, "{{b}}B");
    }

    #[test]
    fn test_unclosed_placeholder_is_literal() {
        let template = PromptTemplate::new("test", None, vec![], "a {{b");
        assert_eq!(template.render(&HashMap::new()), "a {{b");
    }

    #[test]
    fn test_required_arguments() {
        let template = PromptTemplate::new(
            "test",
            None,
            vec![
                PromptArgument {
                    name: "doc_id".to_string(),
                    title: None,
                    description: None,
                    required: Some(true),
                },
                PromptArgument {
                    name: "style".to_string(),
                    title: None,
                    description: None,
                    required: None,
                },
            ],
            "",
        );
        assert_eq!(template.required_arguments().collect::<Vec<_>>(), vec!["doc_id"]);
    }
}
