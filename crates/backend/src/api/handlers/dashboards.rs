use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::dto::{
    PersonaCatalog, RenderOutcome, NAV_PARAM, PERSONA_PARAM, SEED_PARAM,
};
use contracts::shared::persona::{Persona, DEFAULT_PERSONA};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{AppState, APP_TITLE};
use crate::dashboards::context::RenderContext;
use crate::shared::random::SeededSource;

/// GET /api/personas
pub async fn get_personas() -> Json<PersonaCatalog> {
    Json(PersonaCatalog::build(APP_TITLE))
}

/// Seed for this render: query parameter, then configured seed, then entropy.
fn random_source(params: &HashMap<String, String>, configured: Option<u64>) -> SeededSource {
    let requested = params
        .get(SEED_PARAM)
        .and_then(|raw| raw.trim().parse::<u64>().ok());
    match requested.or(configured) {
        Some(seed) => SeededSource::from_seed(seed),
        None => SeededSource::from_entropy(),
    }
}

/// GET /api/dashboard?persona=...&nav=...[&seed=N][&<control>=<value>...]
///
/// Missing persona falls back to the default persona, missing nav to that
/// persona's first label. Anything unknown renders the placeholder.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<RenderOutcome> {
    let persona = params
        .get(PERSONA_PARAM)
        .cloned()
        .unwrap_or_else(|| DEFAULT_PERSONA.label().to_string());
    let nav = match params.get(NAV_PARAM) {
        Some(nav) => nav.clone(),
        None => Persona::from_label(&persona)
            .unwrap_or(DEFAULT_PERSONA)
            .default_nav()
            .to_string(),
    };

    tracing::info!("Dashboard: rendering {} / {}", persona, nav);

    let mut rng = random_source(&params, state.config.mock.seed);
    let mut ctx = RenderContext::new(&mut rng, &params, state.clock);
    let outcome = state.registry.render(&persona, &nav, &mut ctx);

    match &outcome {
        RenderOutcome::Dashboard(view) => tracing::info!(
            "Dashboard: returning '{}' with {} controls and {} tabs",
            view.title,
            view.controls.len(),
            view.tabs.len()
        ),
        RenderOutcome::Placeholder { message } => {
            tracing::info!("Dashboard: placeholder: {}", message)
        }
    }
    Json(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::context::testing::test_now;
    use crate::routes::configure_routes;
    use crate::shared::clock::Clock;
    use crate::shared::config::parse_config;
    use crate::shared::random::RandomSource;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn state() -> Arc<AppState> {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 3000
            [static_files]
            dir = "dist"
            "#,
        )
        .unwrap();
        let mut state = AppState::new(config);
        state.clock = Clock::Fixed(test_now());
        Arc::new(state)
    }

    async fn get_json(uri: &str) -> serde_json::Value {
        let response = configure_routes(state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_personas_catalog() {
        let json = get_json("/api/personas").await;
        assert_eq!(json["app_title"], "Pathforge Empower");
        assert_eq!(json["default_persona"], "Individual Contributor");
        assert_eq!(json["personas"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_known_label_renders_dashboard() {
        let json = get_json(
            "/api/dashboard?persona=First%20Line%20Manager&nav=Productivity&seed=3&team=Team%202",
        )
        .await;
        assert_eq!(json["kind"], "dashboard");
        assert_eq!(json["title"], "Team Productivity Dashboard");
    }

    #[tokio::test]
    async fn test_unknown_label_renders_placeholder() {
        let json = get_json("/api/dashboard?persona=Individual%20Contributor&nav=Payroll").await;
        assert_eq!(json["kind"], "placeholder");
        assert_eq!(json["message"], "Dashboard for Payroll is not implemented yet.");
    }

    #[tokio::test]
    async fn test_defaults_to_first_persona_and_label() {
        let json = get_json("/api/dashboard?seed=1").await;
        assert_eq!(json["kind"], "dashboard");
        assert_eq!(json["title"], "Productivity Dashboard");
    }

    #[tokio::test]
    async fn test_same_seed_same_dashboard() {
        let uri = "/api/dashboard?persona=Second%20Line%20Manager%2FDirector&nav=Executive%20Summary&seed=42";
        assert_eq!(get_json(uri).await, get_json(uri).await);
    }

    #[test]
    fn test_seed_precedence() {
        let mut params = HashMap::new();
        params.insert(SEED_PARAM.to_string(), "5".to_string());
        let mut a = random_source(&params, Some(9));
        let mut b = SeededSource::from_seed(5);
        assert_eq!(a.next_f64(), b.next_f64());

        params.insert(SEED_PARAM.to_string(), "abc".to_string());
        let mut c = random_source(&params, Some(9));
        let mut d = SeededSource::from_seed(9);
        assert_eq!(c.next_f64(), d.next_f64());
    }
}
