use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use product_lookup::{LLMClient, LookupClient, LookupConfig, OpenAISearchClient, ProductRequest};
use serde_json::{json, Value};

struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: Value,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Answers exactly one HTTP request with `status` and `body`, returning what it received.
fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                headers.push((key.trim().to_string(), value.trim().to_string()));
            }
        }

        let length = headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);
        let mut raw = vec![0u8; length];
        reader.read_exact(&mut raw).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
        .unwrap();
        stream.flush().unwrap();

        CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: serde_json::from_slice(&raw).unwrap_or(Value::Null),
        }
    });

    (base_url, handle)
}

fn config_for(base_url: &str) -> LookupConfig {
    LookupConfig::new("sk-test")
        .unwrap()
        .with_base_url(base_url)
        .with_model("gpt-4o-search-preview")
        .with_timeout(Duration::from_secs(10))
}

fn completion(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
    .to_string()
}

#[test]
fn generate_posts_search_enabled_chat_completion() {
    let (base_url, server) = serve_once("200 OK", completion("  hello from the model \n"));
    let llm = OpenAISearchClient::new(&config_for(&base_url)).unwrap();

    let text = llm.generate("find DPBS", 321, true).unwrap();
    assert_eq!(text, "hello from the model");

    let captured = server.join().unwrap();
    assert_eq!(captured.request_line, "POST /v1/chat/completions HTTP/1.1");
    assert_eq!(captured.header("authorization"), Some("Bearer sk-test"));
    assert_eq!(captured.body["model"], "gpt-4o-search-preview");
    assert_eq!(captured.body["max_tokens"], 321);
    assert_eq!(captured.body["messages"][0]["content"], "find DPBS");
    assert!(captured.body["web_search_options"].is_object());
}

#[test]
fn padded_model_content_is_extracted() {
    let content = "\n\n  Here is the closest match on thermofisher.com:\n{\"product_name\": \"DPBS, no calcium, no magnesium\", \"catalog_number\": \"14190144\", \"confidence\": \"High\"}\n  ";
    let (base_url, server) = serve_once("200 OK", completion(content));
    let client = LookupClient::from_config(&config_for(&base_url)).unwrap();

    let result = client.lookup(&ProductRequest::new("DPBS"));
    server.join().unwrap();

    assert_eq!(result.search_term, "DPBS");
    assert_eq!(result.product_name, "DPBS, no calcium, no magnesium");
    assert_eq!(result.catalog_number, "14190144");
    assert_eq!(result.confidence, "High");
    assert_eq!(result.estimated_price, "N/A");
    assert_eq!(result.availability, "Unknown");
    assert!(!result.is_error());
}

#[test]
fn unauthorized_status_becomes_transport_failure() {
    let body = json!({"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}})
        .to_string();
    let (base_url, server) = serve_once("401 Unauthorized", body);
    let client = LookupClient::from_config(&config_for(&base_url)).unwrap();

    let result = client.lookup(&ProductRequest::new("Trypsin"));
    server.join().unwrap();

    assert_eq!(result.search_term, "Trypsin");
    assert_eq!(result.product_name, "Error");
    assert_eq!(result.confidence, "Low");
    assert!(result.notes.starts_with("Error: API returned 401"), "{}", result.notes);
    assert!(result.notes.contains("Incorrect API key provided"));
}

#[test]
fn empty_choices_becomes_transport_failure() {
    let (base_url, server) = serve_once("200 OK", json!({"choices": []}).to_string());
    let client = LookupClient::from_config(&config_for(&base_url)).unwrap();

    let result = client.lookup(&ProductRequest::new("PCR mix"));
    server.join().unwrap();

    assert_eq!(result.product_name, "Error");
    assert_eq!(result.notes, "Error: API response contained no message");
}

#[test]
fn unreadable_body_becomes_transport_failure() {
    let (base_url, server) = serve_once("200 OK", "<html>gateway</html>".to_string());
    let llm = OpenAISearchClient::new(&config_for(&base_url)).unwrap();

    let err = llm.generate("find DPBS", 500, true).unwrap_err();
    server.join().unwrap();

    assert!(!err.is_configuration());
    assert!(err.to_string().starts_with("unreadable API response"));
}
