//! Builds the single-turn completion request for a grounded answer.

use doc_store::{Document, SupportConfig};
use llm_client::{CompletionRequest, InlineData, Part};

/// Assembles the model request from the question, the document snapshot, and
/// the assistant configuration.
///
/// Part order is contractual: every document as an inline attachment first
/// (in store order, nothing filtered or truncated), then the assistant
/// instructions, then a note with the document count, then the question.
/// Prior conversation turns are deliberately not an input; only the newest
/// question is sent.
pub fn build_completion_request(
    question: &str,
    documents: &[Document],
    config: &SupportConfig,
) -> CompletionRequest {
    let mut parts = Vec::with_capacity(documents.len() + 3);

    for doc in documents {
        parts.push(Part::InlineData(InlineData {
            mime_type: doc.mime_type.clone(),
            data: doc.content.clone(),
        }));
    }

    parts.push(Part::Text(format!(
        "System Instruction: {}",
        instruction_block(config)
    )));
    parts.push(Part::Text(format!(
        "Context: There are {} document(s) uploaded. Use them to answer the question.",
        documents.len()
    )));
    parts.push(Part::Text(format!("User Question: {question}")));

    CompletionRequest::new(parts)
}

/// Renders the assistant instructions: the operator's display name and rules
/// substituted into the five fixed core rules that define grounded
/// answering.
fn instruction_block(config: &SupportConfig) -> String {
    let rules = if config.behavior_rules.trim().is_empty() {
        "None provided."
    } else {
        config.behavior_rules.as_str()
    };

    format!(
        "You are {name}, a professional customer support assistant.\n\
         \n\
         CORE RULES:\n\
         1. Answer user questions accurately based ONLY on the provided documents.\n\
         2. If multiple documents are provided, analyze all of them to find the answer.\n\
         3. If the answer is not found in the documents, politely state that you do not \
         have that information based on the current knowledge base.\n\
         4. Always be helpful, concise, and professional.\n\
         5. Format your responses using Markdown for better readability.\n\
         \n\
         SPECIFIC GUIDELINES FROM ADMIN:\n\
         {rules}",
        name = config.assistant_name,
        rules = rules,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn doc(name: &str, mime_type: &str, content: &str) -> Document {
        Document {
            id: format!("id-{name}"),
            name: name.to_string(),
            mime_type: mime_type.to_string(),
            content: content.to_string(),
            size_bytes: content.len() as u64,
            uploaded_at: Utc::now(),
        }
    }

    fn text_parts(request: &CompletionRequest) -> Vec<&str> {
        request
            .parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn assembles_attachments_instructions_count_and_question_in_order() {
        let documents = vec![doc("policy.txt", "text/plain", "UmV0dXJucw==")];
        let config = SupportConfig {
            assistant_name: "Helper".to_string(),
            behavior_rules: "Be brief.".to_string(),
        };

        let request =
            build_completion_request("What is the return window?", &documents, &config);

        assert_eq!(request.parts.len(), 4);
        assert!(matches!(
            &request.parts[0],
            Part::InlineData(d) if d.mime_type == "text/plain" && d.data == "UmV0dXJucw=="
        ));

        let texts = text_parts(&request);
        assert!(texts[0].starts_with("System Instruction:"));
        assert!(texts[0].contains("Helper"));
        assert!(texts[0].contains("Be brief."));
        assert!(texts[1].contains("There are 1 document(s) uploaded"));
        assert_eq!(texts[2], "User Question: What is the return window?");
    }

    #[test]
    fn keeps_every_document_in_store_order() {
        let documents = vec![
            doc("b.pdf", "application/pdf", "Yg=="),
            doc("a.txt", "text/plain", "YQ=="),
        ];
        let config = SupportConfig::default();

        let request = build_completion_request("q", &documents, &config);

        assert_eq!(request.parts.len(), 5);
        assert!(matches!(
            &request.parts[0],
            Part::InlineData(d) if d.mime_type == "application/pdf"
        ));
        assert!(matches!(
            &request.parts[1],
            Part::InlineData(d) if d.mime_type == "text/plain"
        ));
        assert!(text_parts(&request)[1].contains("There are 2 document(s) uploaded"));
    }

    #[test]
    fn empty_rules_render_as_none_provided() {
        let documents = vec![doc("a.txt", "text/plain", "YQ==")];
        let config = SupportConfig {
            assistant_name: "DocuSupport AI".to_string(),
            behavior_rules: "   ".to_string(),
        };

        let request = build_completion_request("q", &documents, &config);
        assert!(text_parts(&request)[0].contains("None provided."));
    }
}
