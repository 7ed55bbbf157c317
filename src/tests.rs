//! Integration tests for the LAMFO backend.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::post, Json, Router};
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::chat::{ChatRelay, FALLBACK_REPLY};
use crate::content::{ContentStore, MEMBERS_FILE, PROJECTS_FILE};
use crate::{create_router, AppState};

const MEMBERS: &str = r#"
[[coordinators.member]]
name = "Pedro Albuquerque"
role = "Coordenador"
bio = "Professor associado da UnB."
email = "pedro@unb.br"
department = "Administração"

[[professors.member]]
name = "Herbert Kimura"
role = "Professor Colaborador"
bio = "Finanças quantitativas."
email = "herbert@unb.br"

[[current_students.member]]
name = "Ana Júlia Gonçalves"
role = "Mestranda"
bio = "Aprendizado de máquina aplicado."
email = "ana@unb.br"
program = "PPGA"
graduation_year = 2026

[[alumni.member]]
name = "Mathias Silva"
role = "Egresso"
bio = "Cientista de dados."
email = "mathias@example.org"
current_position = "Banco Central"

[research_areas]
areas = ["Machine Learning", "Finanças"]
"#;

const PROJECTS: &str = r#"
[[projects]]
name = "Projeto X"
description = "Previsão de séries temporais."
research_area = "Machine Learning"
status = "Ativo"
year_started = "2023"
participants = ["Ana Júlia Gonçalves"]
technologies = ["Python"]
abstract = "Modelos de previsão."

[[projects]]
name = "Projeto Y"
description = "Risco de crédito."
research_area = "Finanças"
status = "Concluído"
year_started = "2019"
year_ended = "2021"
participants = ["Mathias Silva"]
technologies = ["R"]
paper_url = "https://example.org/paper.pdf"
abstract = "Modelos de risco."

[[projects]]
name = "Análise de Risco Financeiro"
description = "Indicadores de estresse."
research_area = "Finanças"
status = "Em Planejamento"
year_started = "2025"
participants = []
technologies = []
abstract = "Painel de monitoramento."

[research_areas]
areas = ["Machine Learning", "Finanças"]
"#;

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    content_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_chat(None).await
    }

    async fn with_chat(chat_api_url: Option<String>) -> Self {
        let content_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(content_dir.path().join(MEMBERS_FILE), MEMBERS).unwrap();
        std::fs::write(content_dir.path().join(PROJECTS_FILE), PROJECTS).unwrap();

        let content = ContentStore::reloading(content_dir.path());
        let chat = ChatRelay::new(chat_api_url, Duration::from_secs(5)).unwrap();

        let state = AppState {
            content: Arc::new(content),
            chat: Arc::new(chat),
        };

        let base_url = serve(create_router(state)).await;

        TestFixture {
            client: Client::new(),
            base_url,
            content_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }
}

/// Serve `app` on an ephemeral port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_members_directory() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/members").await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let categories = body["data"]["categories"].as_array().unwrap();
    let order: Vec<_> = categories
        .iter()
        .map(|c| c["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        order,
        vec!["coordinators", "professors", "current_students", "alumni"]
    );
    assert_eq!(categories[0]["label"], "Coordenação");

    let student = &categories[2]["members"][0];
    assert_eq!(student["name"], "Ana Júlia Gonçalves");
    assert_eq!(student["identifier"], "ana-julia-goncalves");
    assert_eq!(student["graduation_year"], "2026");
    assert!(student.get("linkedin").is_none());

    assert_eq!(
        body["data"]["researchAreas"],
        json!(["Machine Learning", "Finanças"])
    );
}

#[tokio::test]
async fn test_member_profile_round_trip() {
    let fixture = TestFixture::new().await;

    let (_, directory) = fixture.get_json("/api/members").await;
    for section in directory["data"]["categories"].as_array().unwrap() {
        for member in section["members"].as_array().unwrap() {
            let identifier = member["identifier"].as_str().unwrap();
            let (status, body) = fixture
                .get_json(&format!("/api/members/{}", identifier))
                .await;

            assert_eq!(status, 200);
            assert_eq!(body["data"]["member"]["name"], member["name"]);
            assert_eq!(body["data"]["category"], section["category"]);
        }
    }

    let (_, body) = fixture.get_json("/api/members/mathias-silva").await;
    assert_eq!(body["data"]["categoryLabel"], "Egressos");
    assert_eq!(body["data"]["initials"], "MS");
    assert_eq!(body["data"]["member"]["current_position"], "Banco Central");
}

#[tokio::test]
async fn test_unknown_identifiers_are_not_found() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/members/does-not-exist").await;
    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, body) = fixture.get_json("/api/projects/does-not-exist").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_project_list_without_filters() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/projects").await;
    assert_eq!(status, 200);

    let data = &body["data"];
    assert_eq!(data["total"], 3);
    assert_eq!(data["shown"], 3);
    assert_eq!(data["filterActive"], false);
    assert_eq!(
        data["statuses"],
        json!(["Ativo", "Concluído", "Em Planejamento"])
    );

    let names: Vec<_> = data["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Projeto X", "Projeto Y", "Análise de Risco Financeiro"]
    );

    let first = &data["projects"][0];
    assert_eq!(first["identifier"], "projeto-x");
    assert_eq!(first["period"], "2023 - Em andamento");
    assert_eq!(first["ongoing"], true);
}

#[tokio::test]
async fn test_project_list_filters() {
    let fixture = TestFixture::new().await;

    let (_, body) = fixture
        .get_json("/api/projects?status=Conclu%C3%ADdo")
        .await;
    let projects = body["data"]["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Projeto Y");
    assert_eq!(body["data"]["filterActive"], true);
    assert_eq!(body["data"]["total"], 3);

    let (_, body) = fixture
        .get_json("/api/projects?area=Finan%C3%A7as&q=RISCO")
        .await;
    let projects = body["data"]["projects"].as_array().unwrap();
    let names: Vec<_> = projects.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Projeto Y", "Análise de Risco Financeiro"]);

    let (_, body) = fixture.get_json("/api/projects?q=painel").await;
    assert_eq!(body["data"]["shown"], 1);

    let (_, body) = fixture.get_json("/api/projects?status=&area=&q=").await;
    assert_eq!(body["data"]["shown"], 3);
    assert_eq!(body["data"]["filterActive"], false);
}

#[tokio::test]
async fn test_project_detail() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .get_json("/api/projects/analise-de-risco-financeiro")
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["name"], "Análise de Risco Financeiro");
    assert_eq!(body["data"]["status"], "Em Planejamento");
    assert_eq!(body["data"]["abstract"], "Painel de monitoramento.");
    assert_eq!(body["data"]["period"], "2025");

    let (_, body) = fixture.get_json("/api/projects/projeto-y").await;
    assert_eq!(body["data"]["period"], "2019 - 2021");
    assert_eq!(body["data"]["paper_url"], "https://example.org/paper.pdf");
}

#[tokio::test]
async fn test_identifier_index() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/api/identifiers").await;
    assert_eq!(status, 200);
    assert_eq!(
        body["data"]["projects"],
        json!(["projeto-x", "projeto-y", "analise-de-risco-financeiro"])
    );
    assert_eq!(body["data"]["members"].as_array().unwrap().len(), 4);
    assert_eq!(body["data"]["members"][0], "pedro-albuquerque");
}

#[tokio::test]
async fn test_broken_content_is_a_configuration_error() {
    let fixture = TestFixture::new().await;

    let without_areas = PROJECTS.replace(
        "[research_areas]\nareas = [\"Machine Learning\", \"Finanças\"]",
        "",
    );
    std::fs::write(fixture.content_dir.path().join(PROJECTS_FILE), without_areas).unwrap();

    let (status, body) = fixture.get_json("/api/projects").await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");

    std::fs::remove_file(fixture.content_dir.path().join(MEMBERS_FILE)).unwrap();
    let (status, body) = fixture.get_json("/api/members/pedro-albuquerque").await;
    assert_eq!(status, 500);
    assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
}

#[tokio::test]
async fn test_budget_request_accepted() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/budget"))
        .json(&json!({
            "name": "Maria Souza",
            "email": "maria@empresa.com",
            "company": "Empresa",
            "projectType": "Consultoria",
            "description": "Modelo de previsão de demanda"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["message"], "Solicitação recebida com sucesso!");
    assert_eq!(body["data"]["requestId"].as_str().unwrap().len(), 36);
}

#[tokio::test]
async fn test_budget_request_validation_errors() {
    let fixture = TestFixture::new().await;

    let cases = [
        json!({ "email": "a@b.c", "projectType": "x", "description": "y" }),
        json!({ "name": "A", "projectType": "x", "description": "y" }),
        json!({ "name": "A", "email": "a@b.c", "description": "y" }),
        json!({ "name": "A", "email": "a@b.c", "projectType": "x", "description": "" }),
    ];

    for payload in cases {
        let resp = fixture
            .client
            .post(fixture.url("/api/budget"))
            .json(&payload)
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 400);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Campos obrigatórios não preenchidos"
        );
    }
}

#[tokio::test]
async fn test_budget_request_malformed_body() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/budget"))
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

/// Start a stand-in for the external chat service that answers with `reply`.
async fn mock_chat_service(reply: Value) -> String {
    let app = Router::new().route(
        "/chat",
        post(move |Json(request): Json<Value>| {
            let mut reply = reply.clone();
            if reply.is_null() {
                reply = json!({ "result": { "response": {
                    "content": format!("eco: {}", request["content"].as_str().unwrap_or_default())
                } } });
            }
            async move { Json(reply) }
        }),
    );

    format!("{}/chat", serve(app).await)
}

#[tokio::test]
async fn test_chat_relay_forwards_message() {
    let upstream = mock_chat_service(Value::Null).await;
    let fixture = TestFixture::with_chat(Some(upstream)).await;

    let resp = fixture
        .client
        .post(fixture.url("/api/chat"))
        .json(&json!({ "content": "Olá" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["content"], "eco: Olá");
}

#[tokio::test]
async fn test_chat_relay_empty_reply_uses_fallback() {
    let upstream = mock_chat_service(json!({ "result": { "response": { "content": "" } } })).await;
    let fixture = TestFixture::with_chat(Some(upstream)).await;

    let resp = fixture
        .client
        .post(fixture.url("/api/chat"))
        .json(&json!({ "content": "Olá" }))
        .send()
        .await
        .unwrap();

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["content"], FALLBACK_REPLY);
}

#[tokio::test]
async fn test_chat_relay_upstream_failure() {
    let upstream = mock_chat_service(json!({ "unexpected": true })).await;
    let fixture = TestFixture::with_chat(Some(upstream)).await;

    let resp = fixture
        .client
        .post(fixture.url("/api/chat"))
        .json(&json!({ "content": "Olá" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 502);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_chat_relay_disabled() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/chat"))
        .json(&json!({ "content": "Olá" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 503);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");

    let resp = fixture
        .client
        .post(fixture.url("/api/chat"))
        .header("content-type", "application/json")
        .body("[]")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}
