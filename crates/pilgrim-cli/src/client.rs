//! Thin HTTP client for driving a navigation session from the CLI.

use anyhow::{bail, Result};
use serde::Deserialize;
use serde_json::{json, Value};

pub struct PilgrimClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}

impl PilgrimClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            client: reqwest::Client::new(),
        }
    }

    /// Open a session and remember the token for subsequent calls.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/v1/session/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        if !response.status().is_success() {
            bail!("Login failed: {}", response.text().await?);
        }
        let login: LoginResponse = response.json().await?;
        self.token = Some(login.token.clone());
        Ok(login)
    }

    pub async fn update_selection(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        preference: Option<&str>,
    ) -> Result<Value> {
        let url = format!("{}/v1/nav/selection", self.base_url);
        let body = json!({ "start": start, "end": end, "preference": preference });
        self.send(self.client.put(&url).json(&body)).await
    }

    pub async fn find_route(&self) -> Result<Value> {
        let url = format!("{}/v1/nav/find-route", self.base_url);
        self.send(self.client.post(&url)).await
    }

    pub async fn nav_state(&self) -> Result<Value> {
        let url = format!("{}/v1/nav/state", self.base_url);
        self.send(self.client.get(&url)).await
    }

    pub async fn zones(&self) -> Result<Value> {
        let url = format!("{}/v1/nav/zones", self.base_url);
        self.send(self.client.get(&url)).await
    }

    pub async fn enter_view(&self) -> Result<Value> {
        let url = format!("{}/v1/nav/view/enter", self.base_url);
        self.send(self.client.post(&url)).await
    }

    pub async fn exit_view(&self) -> Result<Value> {
        let url = format!("{}/v1/nav/view/exit", self.base_url);
        self.send(self.client.post(&url)).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let Some(token) = self.token.as_deref() else {
            bail!("Not logged in; call login() first");
        };
        let response = request.bearer_auth(token).send().await?;
        let status = response.status();
        let body: Value = response.json().await?;
        if !status.is_success() {
            bail!(
                "Server returned {}: {}",
                status,
                body["error"].as_str().unwrap_or("unknown error")
            );
        }
        Ok(body)
    }
}
