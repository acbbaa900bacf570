//! Manual smoke checks against a running backend
//!
//! Each check issues one GET, prints what came back and stops the run at the
//! first failure with a hint to start the server. Nothing is retried.

mod client;

pub use client::{AlumniResponse, SmokeClient, SmokeError, TestResponse};

/// A single endpoint check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Test,
    Alumni,
}

impl Check {
    pub const ALL: &'static [Check] = &[Check::Test, Check::Alumni];
}

/// Lines printed by a smoke run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeReport {
    pub lines: Vec<String>,
    pub failure: Option<String>,
}

impl SmokeReport {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Run `checks` in order, stopping at the first failure
pub async fn run_smoke(client: &SmokeClient, checks: &[Check]) -> SmokeReport {
    let mut lines = vec![format!("🔍 Testing API at {}", client.base_url())];
    if client.has_token() {
        lines.push("🔑 Sending bearer token".to_string());
    }

    for check in checks {
        let result = match check {
            Check::Test => client
                .test()
                .await
                .map(|r| vec![format!("✅ /test responded: {}", r.message)]),
            Check::Alumni => client.alumni().await.map(|r| alumni_lines(&r)),
        };

        match result {
            Ok(mut passed) => lines.append(&mut passed),
            Err(e) => {
                log::warn!("Smoke check {:?} failed: {}", check, e);
                let failure = e.to_string();
                lines.push(format!("❌ Smoke test failed: {}", failure));
                lines.push(format!(
                    "💡 Make sure the server is running at {}",
                    client.base_url()
                ));
                return SmokeReport {
                    lines,
                    failure: Some(failure),
                };
            }
        }
    }

    lines.push("🎉 All smoke checks passed".to_string());
    SmokeReport {
        lines,
        failure: None,
    }
}

fn alumni_lines(response: &AlumniResponse) -> Vec<String> {
    let mut lines = vec![
        format!("✅ /alumni status: {}", response.status),
        format!("✅ /alumni results: {}", response.results),
    ];

    if let Some(data) = &response.data {
        let records = match data {
            serde_json::Value::Array(items) => Some(items.len()),
            serde_json::Value::Object(map) => {
                map.values().find_map(|v| v.as_array().map(Vec::len))
            }
            _ => None,
        };
        if let Some(records) = records {
            lines.push(format!("✅ /alumni data: {} records", records));
        }
    }
    lines
}

#[cfg(test)]
#[path = "smoke_tests.rs"]
mod smoke_tests;
