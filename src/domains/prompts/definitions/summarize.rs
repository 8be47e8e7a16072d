//! Summarize prompt definition.

use super::{PromptDefinition, doc_id_argument};
use rmcp::model::PromptArgument;

/// Summarize a document.
pub struct SummarizePrompt;

impl PromptDefinition for SummarizePrompt {
    const NAME: &'static str = "summarize";
    const DESCRIPTION: &'static str = "Summarizes the contents of the document.";

    fn template() -> &'static str {
        r#"Your goal is to summarize a document.

The id of the document you need to summarize is:
<document_id>
{{doc_id}}
</document_id>

Use the 'read_doc_contents' tool to read the document, then reply with a concise summary of its contents. Do not edit the document."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![doc_id_argument("Id of the document to summarize.")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_prompt_metadata() {
        assert_eq!(SummarizePrompt::NAME, "summarize");
        assert!(!SummarizePrompt::DESCRIPTION.is_empty());

        let args = SummarizePrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "doc_id");
        assert_eq!(args[0].required, Some(true));
    }

    #[test]
    fn test_summarize_template_mentions_read_tool() {
        assert!(SummarizePrompt::template().contains("read_doc_contents"));
    }
}
