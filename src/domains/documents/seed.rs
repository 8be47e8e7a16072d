//! Seed documents loaded at startup.

use super::store::Document;

const SEED: &[(&str, &str)] = &[
    (
        "deposition.md",
        "This deposition covers the testimony of Angela Smith, P.E.",
    ),
    (
        "report.pdf",
        "The report details the state of a 20m condenser tower.",
    ),
    (
        "financials.docx",
        "These financials outline the project's budget and expenditures.",
    ),
    (
        "outlook.pdf",
        "This document presents the projected future performance of the system.",
    ),
    (
        "plan.md",
        "The plan outlines the steps for the project's implementation.",
    ),
    (
        "spec.txt",
        "These specifications define the technical requirements for the equipment.",
    ),
];

/// The documents the server is seeded with, in registration order.
pub fn default_documents() -> Vec<Document> {
    SEED.iter()
        .map(|(id, text)| Document::new(*id, *text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_documents() {
        let docs = default_documents();
        assert_eq!(docs.len(), 6);
        assert_eq!(docs[0].id, "deposition.md");
        assert_eq!(docs[5].id, "spec.txt");
        assert!(docs[1].text.contains("condenser tower"));
    }
}
