//! Shared fixtures for driving the full router with signed requests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::Query;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::{Json, Router};
use dicebot::build_router;
use dicebot::shared::middleware::discord_validation::{SIGNATURE_HEADER, TIMESTAMP_HEADER};
use dicebot::shared::structs::AppState;
use dicebot::shared::structs::config::Configuration;
use dicebot::shared::structs::dice::{RollError, RollResult};
use dicebot::shared::utility::dice_server::{DiceServerClient, Roller};
use ed25519_dalek::{Signer, SigningKey};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TIMESTAMP: &str = "1700000000";

/// Counts calls so tests can assert the dice server was never reached.
#[derive(Default)]
pub struct CountingRoller {
    pub calls: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Roller for CountingRoller {
    async fn roll(&self, dice: &str, game: &str) -> Result<RollResult, RollError> {
        self.calls
            .lock()
            .unwrap()
            .push((dice.to_string(), game.to_string()));
        Ok(RollResult {
            text: format!("{game}: {dice}"),
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub signing_key: SigningKey,
}

impl TestApp {
    pub fn with_roller(roller: Arc<dyn Roller>) -> Self {
        let signing_key = SigningKey::from_bytes(&[9u8; 32]);
        let public_key = hex::encode(signing_key.verifying_key().to_bytes());
        let app_state = AppState::with_roller(Configuration::new(), &public_key, roller);

        TestApp {
            router: build_router(app_state),
            signing_key,
        }
    }

    pub fn with_dice_server(endpoint: &str) -> Self {
        Self::with_roller(Arc::new(DiceServerClient::new(
            reqwest::Client::new(),
            endpoint,
        )))
    }

    pub fn sign(&self, timestamp: &str, body: &[u8]) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        hex::encode(self.signing_key.sign(&message).to_bytes())
    }

    pub fn signed_request(&self, body: &str) -> Request<Body> {
        Request::post("/dicebot/interactions")
            .header(SIGNATURE_HEADER, self.sign(TIMESTAMP, body.as_bytes()))
            .header(TIMESTAMP_HEADER, TIMESTAMP)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Starts a stand-in for the BCDice server that answers every query with `reply`.
pub async fn spawn_dice_server(reply: serde_json::Value) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind dice server");
    let addr = listener.local_addr().unwrap();

    let app = Router::new().route(
        "/",
        get(move |Query(_params): Query<HashMap<String, String>>| {
            let reply = reply.clone();
            async move { Json(reply) }
        }),
    );

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Dice server failed");
    });

    format!("http://{addr}/")
}

/// An address nothing listens on.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}
