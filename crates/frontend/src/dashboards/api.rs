use contracts::dashboards::dto::{PersonaCatalog, RenderOutcome, NAV_PARAM, PERSONA_PARAM};
use contracts::shared::widgets::ACTION_PARAM;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::layout::global_context::Selection;

const API_BASE: &str = "/api";

/// Query string of one render request. Empty persona or label is left out.
pub fn dashboard_query(selection: &Selection, action: Option<&str>) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    if !selection.persona.is_empty() {
        pairs.push((PERSONA_PARAM, &selection.persona));
    }
    if !selection.nav.is_empty() {
        pairs.push((NAV_PARAM, &selection.nav));
    }
    pairs.extend(selection.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    if let Some(action) = action {
        pairs.push((ACTION_PARAM, action));
    }
    pairs
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Personas and their navigation labels
pub async fn get_personas() -> Result<PersonaCatalog, String> {
    get_json(&format!("{}/personas", API_BASE)).await
}

/// Render the selected dashboard, optionally as the result of a button press
pub async fn get_dashboard(
    selection: &Selection,
    action: Option<&str>,
) -> Result<RenderOutcome, String> {
    let url = format!("{}/dashboard?{}", API_BASE, dashboard_query(selection, action));
    get_json(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_query_encodes_labels_and_params() {
        let selection = Selection {
            persona: "HR Business Partner/HR Head".to_string(),
            nav: "Engagement & Compliance".to_string(),
            params: BTreeMap::from([("time_period".to_string(), "Last 3 Months".to_string())]),
        };
        assert_eq!(
            dashboard_query(&selection, None),
            "persona=HR%20Business%20Partner%2FHR%20Head\
             &nav=Engagement%20%26%20Compliance\
             &time_period=Last%203%20Months"
        );
    }

    #[test]
    fn test_query_appends_action_last() {
        let selection = Selection {
            persona: "First Line Manager".to_string(),
            nav: "Overview".to_string(),
            params: BTreeMap::new(),
        };
        let query = dashboard_query(&selection, Some("refresh"));
        assert!(query.ends_with("&action=refresh"));
        assert_eq!(dashboard_query(&Selection::default(), None), "");
    }
}
