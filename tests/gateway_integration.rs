//! Gateway integration tests
//!
//! The analyzer must always resolve with display text and never call the
//! model without a credential.

mod common;

use common::MockModel;
use healthbridge::chat::{ChatMessage, ChatSession, Transcript};
use healthbridge::gateway::{AnalysisOutcome, GeminiClient, SymptomAnalyzer, APOLOGY_PREAMBLE};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const SYMPTOMS: &str = "I have a fever and headache for 2 days";
const MODEL_REPLY: &str = "### Possible Conditions\n- Viral fever\n\n### Severity Assessment\n**Mild**";

fn key() -> Option<String> {
    Some("test-key".to_string())
}

#[tokio::test]
async fn test_success_returns_text_verbatim() {
    let analyzer = SymptomAnalyzer::new(MockModel::replying(MODEL_REPLY), key());
    assert_eq!(analyzer.analyze(SYMPTOMS).await, MODEL_REPLY);
}

#[tokio::test]
async fn test_missing_credential_makes_no_call() {
    let model = Arc::new(MockModel::replying(MODEL_REPLY));
    let analyzer = SymptomAnalyzer::new(Arc::clone(&model), None);

    let reply = analyzer.analyze(SYMPTOMS).await;

    assert!(reply.starts_with(APOLOGY_PREAMBLE));
    assert!(reply.contains("Gemini API key is not configured"));
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_model_error_message_is_embedded() {
    let analyzer = SymptomAnalyzer::new(MockModel::failing("rate limited"), key());

    let reply = analyzer.analyze(SYMPTOMS).await;

    assert!(reply.starts_with(APOLOGY_PREAMBLE));
    assert!(reply.contains("rate limited"));
    assert!(reply.ends_with("Please try again or consult a healthcare professional."));
}

#[tokio::test]
async fn test_empty_response_is_a_failure() {
    let analyzer = SymptomAnalyzer::new(MockModel::replying(""), key());

    let reply = analyzer.analyze(SYMPTOMS).await;

    assert!(reply.starts_with(APOLOGY_PREAMBLE));
    assert!(reply.contains("No response received from AI model"));
}

#[tokio::test]
async fn test_outcome_distinguishes_failures() {
    let missing = SymptomAnalyzer::new(MockModel::replying("x"), None);
    assert_eq!(missing.analyze_outcome(SYMPTOMS).await, AnalysisOutcome::ConfigError);

    let failing = SymptomAnalyzer::new(MockModel::failing("timeout"), key());
    assert_eq!(
        failing.analyze_outcome(SYMPTOMS).await,
        AnalysisOutcome::TransportError("timeout".to_string())
    );

    let empty = SymptomAnalyzer::new(MockModel::replying(""), key());
    assert_eq!(empty.analyze_outcome(SYMPTOMS).await, AnalysisOutcome::EmptyResponse);
}

#[tokio::test]
async fn test_every_input_resolves_non_empty() {
    let long = "x".repeat(10_000);
    let inputs = ["a", "chest pain", "🤒 fever", "  padded  ", long.as_str()];
    let cases = [
        MockModel::replying("ok"),
        MockModel::replying(""),
        MockModel::failing(""),
        MockModel::failing("boom"),
    ];

    for model in cases {
        let analyzer = SymptomAnalyzer::new(model, key());
        for input in inputs {
            assert!(!analyzer.analyze(input).await.is_empty());
        }
    }
}

#[tokio::test]
async fn test_one_call_per_analysis_with_raw_text_in_prompt() {
    let model = Arc::new(MockModel::replying(MODEL_REPLY));
    let analyzer = SymptomAnalyzer::new(Arc::clone(&model), key());

    analyzer.analyze(SYMPTOMS).await;
    analyzer.analyze("cough").await;

    assert_eq!(model.call_count(), 2);
    let prompts = model.prompts();
    assert!(prompts[0].contains(SYMPTOMS));
    assert!(prompts[1].contains("cough"));
}

#[tokio::test]
async fn test_transcript_gets_model_reply() {
    let analyzer = Arc::new(SymptomAnalyzer::new(MockModel::replying(MODEL_REPLY), key()));
    let mut chat = ChatSession::new(analyzer);

    chat.send(SYMPTOMS).await;

    let messages = chat.transcript().messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].text, SYMPTOMS);
    assert!(!messages[1].is_from_assistant);
    let last = chat.transcript().last().unwrap();
    assert_eq!(last.text, MODEL_REPLY);
    assert!(last.is_from_assistant);
}

#[tokio::test]
async fn test_transcript_gets_config_fallback_without_call() {
    let model = Arc::new(MockModel::replying(MODEL_REPLY));
    let analyzer = Arc::new(SymptomAnalyzer::new(Arc::clone(&model), None));
    let mut chat = ChatSession::new(analyzer);

    chat.send(SYMPTOMS).await;

    let last = chat.transcript().last().unwrap();
    assert!(last.is_from_assistant);
    assert!(last.text.contains("Gemini API key is not configured"));
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_transcript_gets_error_fallback() {
    let analyzer = Arc::new(SymptomAnalyzer::new(MockModel::failing("rate limited"), key()));
    let mut chat = ChatSession::new(analyzer);

    chat.send(SYMPTOMS).await;

    let last = chat.transcript().last().unwrap();
    assert!(last.is_from_assistant);
    assert!(last.text.starts_with(APOLOGY_PREAMBLE));
    assert!(last.text.contains("rate limited"));
}

#[tokio::test]
async fn test_transcript_appends_after_prior_messages() {
    let model = Arc::new(MockModel::replying("reply"));
    let analyzer = Arc::new(SymptomAnalyzer::new(Arc::clone(&model), key()));

    let mut prior = Transcript::new();
    prior.push(ChatMessage::assistant("earlier answer"));
    prior.push(ChatMessage::user("earlier question"));
    let mut chat = ChatSession::with_transcript(analyzer, prior);

    chat.send("same").await;
    chat.send("same").await;

    let texts: Vec<(&str, bool)> = chat
        .transcript()
        .iter()
        .map(|m| (m.text.as_str(), m.is_from_assistant))
        .collect();
    assert_eq!(
        texts,
        vec![
            ("earlier answer", true),
            ("earlier question", false),
            ("same", false),
            ("reply", true),
            ("same", false),
            ("reply", true),
        ]
    );
}

#[tokio::test]
async fn test_blank_input_is_not_sent() {
    let model = Arc::new(MockModel::replying("reply"));
    let analyzer = Arc::new(SymptomAnalyzer::new(Arc::clone(&model), key()));
    let mut chat = ChatSession::new(analyzer);

    assert!(chat.send("   ").await.is_none());
    assert_eq!(chat.transcript().len(), 1);
    assert_eq!(model.call_count(), 0);
}

/// Serve exactly one canned HTTP response on a local port; the raw request
/// arrives on the returned channel
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (captured_tx, captured_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request_complete(&request) {
                break;
            }
        }

        let response = format!(
            "{}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = captured_tx.send(String::from_utf8_lossy(&request).into_owned());
    });

    (format!("http://{}", addr), captured_rx)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

#[tokio::test]
async fn test_gemini_client_reads_candidate_text() {
    let (base, _request) = serve_once(
        "HTTP/1.1 200 OK",
        r####"{"candidates":[{"content":{"role":"model","parts":[{"text":"### Possible Conditions\n..."}]}}]}"####,
    )
    .await;
    let client = GeminiClient::with_base_url(&base).unwrap();
    let analyzer = SymptomAnalyzer::new(client, key());

    assert_eq!(analyzer.analyze(SYMPTOMS).await, "### Possible Conditions\n...");
}

#[tokio::test]
async fn test_gemini_client_surfaces_service_error() {
    let (base, _request) = serve_once(
        "HTTP/1.1 429 Too Many Requests",
        r#"{"error":{"code":429,"message":"rate limited","status":"RESOURCE_EXHAUSTED"}}"#,
    )
    .await;
    let client = GeminiClient::with_base_url(&base).unwrap();
    let analyzer = SymptomAnalyzer::new(client, key());

    let reply = analyzer.analyze(SYMPTOMS).await;
    assert!(reply.starts_with(APOLOGY_PREAMBLE));
    assert!(reply.contains("rate limited"));
}

#[tokio::test]
async fn test_gemini_client_sends_gemini_wire_format() {
    let (base, request) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#,
    )
    .await;
    let client = GeminiClient::with_base_url(&base).unwrap();
    let analyzer = SymptomAnalyzer::new(client, key());

    assert_eq!(analyzer.analyze(SYMPTOMS).await, "ok");

    let raw = request.await.unwrap();
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    let mut lines = head.lines();

    assert_eq!(
        lines.next().unwrap(),
        "POST /v1beta/models/gemini-2.0-flash:generateContent HTTP/1.1"
    );
    assert!(lines.any(|line| {
        line.split_once(':').map_or(false, |(name, value)| {
            name.eq_ignore_ascii_case("x-goog-api-key") && value.trim() == "test-key"
        })
    }));

    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["contents"][0]["role"], "user");
    assert!(json["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .contains(SYMPTOMS));
    assert_eq!(json["generationConfig"]["temperature"], 1.0);
    let top_p = json["generationConfig"]["topP"].as_f64().unwrap();
    assert!((top_p - 0.95).abs() < 1e-6);
    assert_eq!(json["generationConfig"]["topK"], 40);
    assert_eq!(json["generationConfig"]["maxOutputTokens"], 8192);
}

#[tokio::test]
async fn test_gemini_client_unreachable_host() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::with_base_url(&format!("http://{}", addr)).unwrap();
    let analyzer = SymptomAnalyzer::new(client, key());

    let outcome = analyzer.analyze_outcome(SYMPTOMS).await;
    assert!(matches!(outcome, AnalysisOutcome::TransportError(ref d) if d.contains("Failed to send request")));
}
