//! Format prompt definition.

use super::{PromptDefinition, doc_id_argument};
use rmcp::model::PromptArgument;

/// Rewrite a document in Markdown.
///
/// The document id is not checked here; an unknown id surfaces when the
/// agent calls the document tools.
pub struct FormatPrompt;

impl PromptDefinition for FormatPrompt {
    const NAME: &'static str = "format";
    const DESCRIPTION: &'static str = "Rewrites the contents of the document in Markdown format.";

    fn template() -> &'static str {
        r#"Your goal is to reformat a document to be written with markdown syntax.

The id of the document you need to reformat is:
<document_id>
{{doc_id}}
</document_id>

Add in headers, bullet points, tables, etc as necessary. Feel free to add in structure.
Use the 'edit_doc_contents' tool to edit the document. After the document has been reformatted, reply with a short note describing the changes."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![doc_id_argument("Id of the document to format.")]
    }
}
