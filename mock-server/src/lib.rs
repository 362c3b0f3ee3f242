//! Local stand-in for the cloud printer API.
//!
//! Verifies signatures with its own implementation of the signing rules, so
//! a drift in the client's field order shows up as a rejected request.

use std::{collections::HashMap, sync::Arc};

use axum::{extract::State, routing::post, Form, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct Partner {
    pub api_key: String,
    pub username: String,
}

/// A print job accepted by the server.
#[derive(Clone, Debug, Serialize)]
pub struct Job {
    pub id: Uuid,
    pub partner: String,
    pub machine_code: String,
    pub content: String,
}

#[derive(Default)]
pub struct Registry {
    pub partners: HashMap<String, Partner>,
    /// machine code -> (partner id, machine secret)
    pub machines: HashMap<String, (String, String)>,
    pub jobs: Vec<Job>,
}

pub type Db = Arc<RwLock<Registry>>;

#[derive(Deserialize)]
pub struct PrintForm {
    pub partner: String,
    pub machine_code: String,
    pub content: String,
    pub time: String,
    pub sign: String,
}

#[derive(Deserialize)]
pub struct AddForm {
    pub machine_code: String,
    pub partner: String,
    #[serde(default)]
    pub mobilephone: String,
    pub printname: String,
    pub username: String,
    pub sign: String,
    pub msign: String,
}

#[derive(Deserialize)]
pub struct RemoveForm {
    pub partner: String,
    pub machine_code: String,
    pub sign: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrintReply {
    pub state: String,
    pub id: String,
}

pub fn md5_upper(raw: &str) -> String {
    format!("{:X}", md5::compute(raw.as_bytes()))
}

/// A registry with one partner and no machines.
pub fn seeded(partner: &str, api_key: &str, username: &str) -> Db {
    let mut registry = Registry::default();
    registry.partners.insert(
        partner.to_string(),
        Partner {
            api_key: api_key.to_string(),
            username: username.to_string(),
        },
    );
    Arc::new(RwLock::new(registry))
}

pub fn app(db: Db) -> Router {
    Router::new()
        .route("/", post(print))
        .route("/addprint.php", post(add_machine))
        .route("/removeprint.php", post(remove_machine))
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app(db)).await
}

fn valid_machine_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())
}

fn reply(state: &str, id: String) -> Json<PrintReply> {
    Json(PrintReply {
        state: state.to_string(),
        id,
    })
}

async fn print(State(db): State<Db>, Form(form): Form<PrintForm>) -> Json<PrintReply> {
    let mut registry = db.write().await;
    let Some(partner) = registry.partners.get(&form.partner).cloned() else {
        warn!(partner = %form.partner, "print: unknown partner");
        return reply("4", String::new());
    };
    let Some((owner, secret)) = registry.machines.get(&form.machine_code).cloned() else {
        warn!(machine_code = %form.machine_code, "print: machine not registered");
        return reply("2", String::new());
    };
    let expected = md5_upper(&format!(
        "{}machine_code{}partner{}time{}{}",
        partner.api_key, form.machine_code, form.partner, form.time, secret
    ));
    if owner != form.partner || expected != form.sign {
        warn!(machine_code = %form.machine_code, "print: signature mismatch");
        return reply("4", String::new());
    }

    let job = Job {
        id: Uuid::new_v4(),
        partner: form.partner,
        machine_code: form.machine_code,
        content: form.content,
    };
    info!(id = %job.id, machine_code = %job.machine_code, "print job accepted");
    let id = job.id.to_string();
    registry.jobs.push(job);
    reply("1", id)
}

async fn add_machine(State(db): State<Db>, Form(form): Form<AddForm>) -> &'static str {
    let mut registry = db.write().await;
    let Some(partner) = registry.partners.get(&form.partner).cloned() else {
        return "5";
    };
    let expected = md5_upper(&format!(
        "{}machine_code{}mobilephone{}partner{}printname{}username{}{}",
        partner.api_key,
        form.machine_code,
        form.mobilephone,
        form.partner,
        form.printname,
        form.username,
        form.msign
    ));
    if expected != form.sign || partner.username != form.username {
        warn!(machine_code = %form.machine_code, "add: signature mismatch");
        return "5";
    }
    if !valid_machine_code(&form.machine_code) {
        return "6";
    }
    if registry.machines.contains_key(&form.machine_code) {
        return "2";
    }
    info!(machine_code = %form.machine_code, name = %form.printname, "machine added");
    registry
        .machines
        .insert(form.machine_code, (form.partner, form.msign));
    "1"
}

async fn remove_machine(State(db): State<Db>, Form(form): Form<RemoveForm>) -> &'static str {
    let mut registry = db.write().await;
    let Some(partner) = registry.partners.get(&form.partner).cloned() else {
        return "5";
    };
    if !valid_machine_code(&form.machine_code) {
        return "6";
    }
    let Some((owner, secret)) = registry.machines.get(&form.machine_code).cloned() else {
        return "3";
    };
    let expected = md5_upper(&format!(
        "{}machine_code{}partner{}{}",
        partner.api_key, form.machine_code, form.partner, secret
    ));
    if owner != form.partner || expected != form.sign {
        warn!(machine_code = %form.machine_code, "remove: signature mismatch");
        return "5";
    }
    info!(machine_code = %form.machine_code, "machine removed");
    registry.machines.remove(&form.machine_code);
    "1"
}
