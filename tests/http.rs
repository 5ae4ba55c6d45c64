use once_cell::sync::Lazy;
use reqwest::{redirect::Policy, Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const USER_NAME: &str = "Ada";

#[derive(Debug, Deserialize)]
struct SymptomEntry {
    label: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct RouteInfo {
    path: String,
    label: String,
    screen: String,
}

#[derive(Debug, Deserialize)]
struct CalendarResponse {
    date: String,
    dataset: String,
    rows: Vec<serde_json::Value>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/")).send().await {
            if resp.status().is_success()
                && resp
                    .text()
                    .await
                    .is_ok_and(|html| html.contains(r#"data-screen="welcome""#))
            {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_codedoc"))
        .env("PORT", port.to_string())
        .env("APP_USER_NAME", USER_NAME)
        .env_remove("APP_FIXTURES_PATH")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_page(path: &str) -> (StatusCode, String) {
    let server = shared_server().await;
    let response = Client::new()
        .get(format!("{}{path}", server.base_url))
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn http_root_renders_welcome_screen() {
    let (status, html) = get_page("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-screen="welcome""#));
    assert!(html.contains(&format!("Welcome Back, {USER_NAME}!")));
    assert!(html.contains("CODEDOC"));
    assert_eq!(html.matches(r#"data-selected="true""#).count(), 0);
    assert!(html.contains("Refill reminder"));
}

#[tokio::test]
async fn http_profile_and_calendar_routes_render_their_screens() {
    let (status, html) = get_page("/profile").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-screen="profile""#));
    assert!(html.contains("DOCTOR CONTACT DETAILS"));

    let (status, html) = get_page("/profile/details").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-screen="profile""#));

    let (status, html) = get_page("/calendar").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"data-screen="calendar""#));
    assert!(!html.contains("modal-backdrop"));
}

#[tokio::test]
async fn http_unknown_path_is_not_found_inside_shell() {
    let (status, html) = get_page("/about").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
    assert!(html.contains("CODEDOC"));
}

#[tokio::test]
async fn http_toggle_state_follows_query() {
    let (_, html) = get_page("/?symptoms=headache&meds=amlodipine").await;
    assert!(html.contains(r#"data-toggle="headache" data-selected="true""#));
    assert!(html.contains(r#"data-toggle="amlodipine" data-selected="true""#));
    assert!(html.contains(r#"data-toggle="fatigue" data-selected="false""#));
    assert!(html.contains(r#"href="/?meds=amlodipine" data-toggle="headache""#));
}

#[tokio::test]
async fn http_adding_custom_symptom_redirects_to_new_state() {
    let server = shared_server().await;
    let client = Client::builder().redirect(Policy::none()).build().unwrap();
    let response = client
        .get(format!("{}/?symptoms=nausea&add=sore+throat", server.base_url))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_redirection());
    let location = response.headers()["location"].to_str().unwrap().to_string();
    assert_eq!(location, "/?symptoms=nausea&custom=sore%20throat");

    let (_, html) = get_page(&location).await;
    assert!(html.contains(r#"data-custom="sore throat""#));
}

#[tokio::test]
async fn http_selecting_calendar_date_updates_display_and_opens_modal() {
    let (status, html) = get_page("/calendar?date=2026-02-14").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<span id="selected-date">Saturday, 14 February 2026</span>"#));
    assert!(html.contains("Symptoms on Saturday, 14 February 2026"));
    assert!(html.contains("February 2026"));

    let (_, closed) = get_page("/calendar?date=2026-02-14&modal=closed").await;
    assert!(!closed.contains("modal-backdrop"));
    assert!(closed.contains("Saturday, 14 February 2026"));
}

#[tokio::test]
async fn http_malformed_calendar_date_is_bad_request() {
    let (status, _) = get_page("/calendar?date=tomorrow").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_page("/api/calendar?date=2026-02-30").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_api_serves_fixtures() {
    let server = shared_server().await;
    let client = Client::new();

    let symptoms: Vec<SymptomEntry> = client
        .get(format!("{}/api/symptoms", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(symptoms[0].label, "Headache");
    assert_eq!(symptoms[0].value, "headache");

    let routes: Vec<RouteInfo> = client
        .get(format!("{}/api/routes", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let paths: Vec<&str> = routes.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/", "/profile", "/calendar"]);
    assert_eq!(routes[2].label, "CALENDAR");
    assert_eq!(routes[2].screen, "calendar");

    let calendar: CalendarResponse = client
        .get(format!("{}/api/calendar?date=2026-02-14", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(calendar.date, "2026-02-14");
    assert!(["Sample A", "Sample B", "Sample C"].contains(&calendar.dataset.as_str()));
    assert!(!calendar.rows.is_empty());

    let missing = client
        .get(format!("{}/api/unknown", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_screens_reject_non_get_methods() {
    let server = shared_server().await;
    let client = Client::new();

    for path in ["/", "/profile", "/calendar"] {
        let response = client
            .post(format!("{}{path}", server.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{path}");
    }

    let head = client
        .head(format!("{}/profile", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(head.status(), StatusCode::OK);
}

#[tokio::test]
async fn http_extreme_calendar_years_are_bad_requests() {
    for path in [
        "/calendar?date=%2B262142-12-31",
        "/calendar?date=-262143-01-01",
        "/calendar?month=%2B262142-12",
        "/api/calendar?date=%2B262142-12-31",
    ] {
        let (status, _) = get_page(path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
    }

    let (status, html) = get_page("/calendar?date=9999-12-31").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("December 9999"));
}
