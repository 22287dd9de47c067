use serde_json::{json, Value};
use tokio::net::TcpListener;
use userdir_config::{Config, ServerConfig};
use userdir_server::ApiServer;

async fn spawn_server() -> (String, tokio::sync::broadcast::Sender<()>) {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..ServerConfig::default()
        },
        ..Config::default()
    };
    let server = ApiServer::new(&config);
    let shutdown = server.shutdown_handle();
    let listener: TcpListener = server.bind().await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server.serve(listener));
    (format!("http://{}/", addr), shutdown)
}

#[tokio::test]
async fn post_query_returns_standard_envelope() {
    let (url, shutdown) = spawn_server().await;
    let client = reqwest::Client::new();

    let response: Value = client
        .post(&url)
        .json(&json!({"query": "{ getUsers { id name } }"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response["data"]["getUsers"][0], json!({"id": "1", "name": "John Doe"}));
    assert!(response.get("errors").is_none());

    let _ = shutdown.send(());
}

#[tokio::test]
async fn mutation_then_query_sees_the_change() {
    let (url, shutdown) = spawn_server().await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(&url)
        .json(&json!({
            "query": "mutation($name: String!, $age: Int!, $isMarried: Boolean!) { createUser(name: $name, age: $age, isMarried: $isMarried) { id } }",
            "variables": {"name": "Bob", "age": 52, "isMarried": true},
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["data"]["createUser"]["id"], "4");

    let found: Value = client
        .post(&url)
        .json(&json!({
            "query": "query($id: ID!) { getUserById(id: $id) { name age } }",
            "variables": {"id": "4"},
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found["data"]["getUserById"], json!({"name": "Bob", "age": 52}));

    let _ = shutdown.send(());
}

#[tokio::test]
async fn edit_missing_user_surfaces_error_message() {
    let (url, shutdown) = spawn_server().await;
    let response: Value = reqwest::Client::new()
        .post(&url)
        .json(&json!({
            "query": "mutation { editUserById(input: {id: \"100\", newAge: 5}) { id } }",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response["errors"][0]["message"], "Пользователь с ID 100 не найден");
    assert_eq!(response["data"], Value::Null);

    let _ = shutdown.send(());
}

#[tokio::test]
async fn get_serves_graphiql() {
    let (url, shutdown) = spawn_server().await;
    let response = reqwest::get(&url).await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.to_lowercase().contains("graphiql"));

    let _ = shutdown.send(());
}
