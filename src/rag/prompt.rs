//! Prompt Assembler.
//!
//! Pure functions of (query, retrieved documents). The context block
//! keeps the retriever's order; nothing is re-ranked here.

use crate::llm::ChatMessage;
use crate::search::RetrievedDocument;

/// Fixed instruction: answer from the supplied context only, say so
/// when the context has no answer, and always cite sources.
const SYSTEM_MESSAGE: &str = "あなたは親切なアシスタントです。
提供されたコンテキスト情報を基に、ユーザーの質問に正確に答えてください。
コンテキストに情報がない場合は、その旨を伝えてください。
回答の際は、参照した情報の出典も明記してください。";

/// Render retrieved documents into a context block, blank-line joined,
/// in input order. Empty input yields an empty string; the system
/// instruction covers the missing-context case.
pub fn build_context(documents: &[RetrievedDocument]) -> String {
    documents
        .iter()
        .map(|doc| format!("【{}】\n{}\n出典: {}", doc.title, doc.content, doc.url))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Assemble the two-message prompt for one question.
pub fn assemble(query: &str, documents: &[RetrievedDocument]) -> Vec<ChatMessage> {
    let context = build_context(documents);
    let user_prompt = format!(
        "コンテキスト:\n{}\n\n質問: {}\n\n上記のコンテキストを参考に、質問に答えてください。",
        context, query
    );

    vec![
        ChatMessage::system(SYSTEM_MESSAGE),
        ChatMessage::user(user_prompt),
    ]
}
