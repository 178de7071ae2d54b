//! Single binary web server: JSON API over the calendar engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).
//!
//! The server keeps no state: every request carries the roster and results
//! it needs, and the response is computed from that snapshot alone.

use actix_web::{
    get, post,
    web::{self, Json},
    App, HttpResponse, HttpServer, Responder,
};
use league_calendar::{
    compose, compute_standings_with, generate_playoffs_from_seeds, read_results_csv, AliasTable,
    CategoryConfig, Fixture, Participant, ScoringRules,
};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarBody {
    #[serde(flatten)]
    category: CategoryConfig,
    /// Poule id -> teams. Ungrouped categories may use any single key.
    roster: BTreeMap<String, Vec<Participant>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StandingsBody {
    roster: Vec<Participant>,
    #[serde(default)]
    fixtures: Vec<Fixture>,
    /// Alternate spelling -> roster name.
    #[serde(default)]
    aliases: HashMap<String, Participant>,
    #[serde(default)]
    scoring: ScoringRules,
}

#[derive(Deserialize)]
struct PlayoffsBody {
    /// Rank-ordered team lists, one per group.
    seeds: Vec<Vec<Participant>>,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-calendar",
    })
}

/// Build a category calendar (groups, rounds, optional playoff template).
#[post("/api/calendars")]
async fn api_compose_calendar(body: Json<CalendarBody>) -> HttpResponse {
    match compose(&body.category, &body.roster) {
        Ok(calendar) => HttpResponse::Ok().json(calendar),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Ranked standings from a roster and fixture results.
#[post("/api/standings")]
async fn api_standings(body: Json<StandingsBody>) -> HttpResponse {
    let aliases = AliasTable::from_pairs(body.aliases.iter().map(|(a, c)| (a, c.clone())));
    let standings = compute_standings_with(&body.roster, &body.fixtures, &aliases, &body.scoring);
    HttpResponse::Ok().json(standings)
}

/// Playoff bracket template from rank-ordered seed lists (empty if not enough qualifiers).
#[post("/api/playoffs")]
async fn api_playoffs(body: Json<PlayoffsBody>) -> HttpResponse {
    HttpResponse::Ok().json(generate_playoffs_from_seeds(&body.seeds))
}

/// Parse a CSV result sheet into fixtures.
#[post("/api/results/import")]
async fn api_import_results(body: String) -> HttpResponse {
    match read_results_csv(body.as_bytes()) {
        Ok(fixtures) => HttpResponse::Ok().json(fixtures),
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Listen address, read from `HOST` / `PORT`.
struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8080;

    fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {:?}, using {}", raw, Self::DEFAULT_PORT);
                Self::DEFAULT_PORT
            }),
            Err(_) => Self::DEFAULT_PORT,
        };
        Self { host, port }
    }
}

/// Request bodies carry whole rosters and result lists.
const JSON_BODY_LIMIT: usize = 1 << 20;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!(
        "Calendar API listening on http://{}:{} (stateless, json limit {} bytes)",
        config.host,
        config.port,
        JSON_BODY_LIMIT
    );

    HttpServer::new(|| {
        App::new()
            .app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
            .service(api_health)
            .service(api_compose_calendar)
            .service(api_standings)
            .service(api_playoffs)
            .service(api_import_results)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
