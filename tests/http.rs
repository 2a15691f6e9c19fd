use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct HabitView {
    id: u64,
    name: String,
    streak: u32,
    completed_today: bool,
    total_completions: usize,
    tracked_days: i64,
}

#[derive(Debug, Deserialize)]
struct AgeResponse {
    years: u32,
    months: u32,
    days: u32,
    days_until_next_anniversary: u32,
    reference_date: String,
}

#[derive(Debug, Deserialize)]
struct DailyCompletion {
    date: String,
    completed: usize,
    total: usize,
    all_done: bool,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    last_7_days: Vec<DailyCompletion>,
    habit_count: usize,
    best_streak: u32,
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

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
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

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("habit_tracker_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/habits")).send().await {
            if resp.status().is_success() {
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
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_habit_tracker"))
        .env("PORT", port.to_string())
        .env("HABITS_DATA_PATH", data_path)
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

async fn create_habit(client: &Client, base_url: &str, name: &str) -> HabitView {
    client
        .post(format!("{base_url}/api/habits"))
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn toggle_habit(client: &Client, base_url: &str, id: u64) -> HabitView {
    client
        .post(format!("{base_url}/api/habits/{id}/toggle"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_create_and_toggle_updates_streak() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let habit = create_habit(&client, &server.base_url, "read").await;
    assert_eq!(habit.name, "read");
    assert_eq!(habit.streak, 0);
    assert!(!habit.completed_today);
    assert_eq!(habit.total_completions, 0);
    assert_eq!(habit.tracked_days, 0);

    let toggled = toggle_habit(&client, &server.base_url, habit.id).await;
    assert!(toggled.completed_today);
    assert_eq!(toggled.streak, 1);
    assert_eq!(toggled.total_completions, 1);

    let habits: Vec<HabitView> = client
        .get(format!("{}/api/habits", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed = habits.iter().find(|h| h.id == habit.id).expect("missing habit");
    assert!(listed.completed_today);
    assert_eq!(listed.streak, 1);
}

#[tokio::test]
async fn http_toggle_off_recounts_from_scratch() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let habit = create_habit(&client, &server.base_url, "run").await;

    let on = toggle_habit(&client, &server.base_url, habit.id).await;
    assert_eq!(on.streak, 1);

    let off = toggle_habit(&client, &server.base_url, habit.id).await;
    assert!(!off.completed_today);
    assert_eq!(off.streak, 0);
    assert_eq!(off.total_completions, 0);

    let back_on = toggle_habit(&client, &server.base_url, habit.id).await;
    assert!(back_on.completed_today);
    assert_eq!(back_on.streak, 1);
}

#[tokio::test]
async fn http_rejects_blank_habit_name() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/habits", server.base_url))
        .json(&serde_json::json!({ "name": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_delete_removes_habit() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let habit = create_habit(&client, &server.base_url, "stretch").await;

    let response = client
        .delete(format!("{}/api/habits/{}", server.base_url, habit.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let habits: Vec<HabitView> = client
        .get(format!("{}/api/habits", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(habits.iter().all(|h| h.id != habit.id));

    let again = client
        .delete(format!("{}/api/habits/{}", server.base_url, habit.id))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), 404);
}

#[tokio::test]
async fn http_toggle_unknown_habit_is_404() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/habits/999999/toggle", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn http_age_breakdown_with_explicit_reference() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let age: AgeResponse = client
        .get(format!(
            "{}/api/age?birth=1990-01-01&reference=2024-01-01",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(age.years, 34);
    assert_eq!(age.months, 0);
    assert_eq!(age.days, 0);
    assert_eq!(age.days_until_next_anniversary, 0);
    assert_eq!(age.reference_date, "2024-01-01");
}

#[tokio::test]
async fn http_age_rejects_future_birth() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/api/age?birth=2999-01-01&reference=2024-01-01",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_age_rejects_malformed_date() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/age?birth=not-a-date", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_stats_reflect_completions() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let habit = create_habit(&client, &server.base_url, "journal").await;
    toggle_habit(&client, &server.base_url, habit.id).await;

    let stats: StatsResponse = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(stats.last_7_days.len(), 7);
    assert!(stats.habit_count >= 1);
    assert!(stats.best_streak >= 1);

    let today = stats.last_7_days.last().expect("empty grid");
    assert!(today.completed >= 1);
    assert_eq!(today.total, stats.habit_count);
    assert!(!today.date.is_empty());
    assert_eq!(today.all_done, today.total > 0 && today.completed == today.total);
}
