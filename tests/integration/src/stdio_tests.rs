//! End-to-end protocol exchange over stdio
//!
//! Drives the compiled binary through an initialize handshake and the static
//! request surface (tools/list, resources/list, unknown methods), plus one
//! session against a stubbed repository. Requests are handled concurrently,
//! so assertions match responses by id rather than by arrival order.

use assert_cmd::Command;
use serde_json::Value;

use alfresco_client::config::{ENV_HOST, ENV_PASSWORD, ENV_USERNAME};
use alfresco_mcp::tool_definitions;

fn run_session_against(host: &str, input: &str) -> Vec<Value> {
    let output = Command::cargo_bin("alfresco-mcp")
        .unwrap()
        .env(ENV_HOST, host)
        .env(ENV_USERNAME, "admin")
        .env(ENV_PASSWORD, "admin")
        .write_stdin(input.to_string())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn run_session(input: &str) -> Vec<Value> {
    // Unroutable but syntactically valid; these sessions never dial it.
    run_session_against("http://127.0.0.1:1", input)
}

fn response_with_id(responses: &[Value], id: u64) -> &Value {
    responses
        .iter()
        .find(|r| r["id"] == serde_json::json!(id))
        .unwrap_or_else(|| panic!("no response with id {id}"))
}

#[test]
fn initialize_then_tools_list() {
    let responses = run_session(concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1.0"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}}"#,
        "\n",
    ));

    // The notification produces no response line.
    assert_eq!(responses.len(), 2);

    let init = response_with_id(&responses, 1);
    assert_eq!(init["result"]["serverInfo"]["name"], "alfresco-mcp");
    assert_eq!(init["result"]["protocolVersion"], "2024-11-05");

    let tools = response_with_id(&responses, 2)["result"]["tools"]
        .as_array()
        .unwrap();
    let served: Vec<&str> = tools
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    let declared: Vec<String> = tool_definitions().into_iter().map(|t| t.name).collect();
    assert_eq!(served, declared);
}

#[test]
fn resources_list_is_empty() {
    let responses =
        run_session("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"resources/list\",\"params\":{}}\n");

    assert_eq!(responses.len(), 1);
    assert_eq!(
        responses[0]["result"]["resources"],
        serde_json::json!([])
    );
}

#[test]
fn unknown_method_yields_method_not_found() {
    let responses =
        run_session("{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"prompts/list\",\"params\":{}}\n");

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["error"]["code"], -32601);
    assert!(
        responses[0]["error"]["message"]
            .as_str()
            .unwrap()
            .contains("prompts/list")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn delayed_request_does_not_stall_the_session() {
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/alfresco/api/-default-/public/search/versions/1/search",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_millis(800)),
        )
        .mount(&upstream)
        .await;

    let host = upstream.uri();
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"search","arguments":{"query":"x"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list","params":{}}"#,
        "\n",
    );

    // The child process blocks this thread until EOF; keep the runtime free
    // to serve the stubbed repository in the meantime.
    let responses = tokio::task::spawn_blocking(move || run_session_against(&host, input))
        .await
        .unwrap();

    assert_eq!(responses.len(), 2);

    // tools/list was sent second but answers first: the delayed search must
    // not hold it up.
    assert_eq!(responses[0]["id"], 2);
    assert!(responses[0]["result"]["tools"].is_array());

    assert_eq!(responses[1]["id"], 1);
    let text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Found 0 items:"));
}

#[test]
fn unsupported_tool_is_rejected_without_network() {
    let responses = run_session(
        "{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"tools/call\",\"params\":{\"name\":\"doesNotExist\",\"arguments\":{}}}\n",
    );

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0]["error"]["code"], -32602);
    assert!(
        responses[0]["error"]["message"]
            .as_str()
            .unwrap()
            .contains("doesNotExist")
    );
}
