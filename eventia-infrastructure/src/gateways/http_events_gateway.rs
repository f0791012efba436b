use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use tracing::warn;
use url::Url;

use eventia_domain::ports::EventsGateway;
use eventia_domain::{ApiResponse, Event, LocationId, LocationLookup, RuntimeConfig};

use crate::http::{ApiClient, ApiRequest};

// Only used to run path and query encoding; never requested.
const ENDPOINT_ROOT: &str = "http://endpoint.invalid/";

pub struct HttpEventsGateway {
    client: ApiClient,
    token: Option<String>,
    lookup: LocationLookup,
}

impl HttpEventsGateway {
    pub fn new(client: ApiClient, config: &RuntimeConfig) -> Self {
        Self {
            client,
            token: config.api_token.clone(),
            lookup: config.location_lookup,
        }
    }

    async fn fetch_events(&self, endpoint: String) -> Result<Vec<Event>> {
        let request = ApiRequest::get(endpoint.clone()).token(self.token.clone());
        let response = self.client.send(request).await?;
        decode_events(&response, &endpoint)
    }
}

#[async_trait]
impl EventsGateway for HttpEventsGateway {
    async fn list_events(&self) -> Result<Vec<Event>> {
        self.fetch_events("/events".to_string()).await
    }

    async fn list_events_by_locations(&self, ids: &[LocationId]) -> Result<Vec<Event>> {
        let endpoint = location_endpoint(self.lookup, ids)?;
        self.fetch_events(endpoint).await
    }
}

/// Builds the location lookup endpoint with every id percent-encoded.
pub fn location_endpoint(lookup: LocationLookup, ids: &[LocationId]) -> Result<String> {
    let mut url = Url::parse(ENDPOINT_ROOT)?;
    match lookup {
        LocationLookup::Path => {
            let joined = ids
                .iter()
                .map(LocationId::as_str)
                .collect::<Vec<_>>()
                .join(",");
            url.path_segments_mut()
                .map_err(|_| anyhow!("endpoint root cannot hold path segments"))?
                .clear()
                .extend(["events", "location", joined.as_str()]);
        }
        LocationLookup::Query => {
            url.set_path("/events/location");
            let mut pairs = url.query_pairs_mut();
            for id in ids {
                pairs.append_pair("ids", id.as_str());
            }
        }
    }

    let mut endpoint = url.path().to_string();
    if let Some(query) = url.query() {
        endpoint.push('?');
        endpoint.push_str(query);
    }
    Ok(endpoint)
}

fn decode_events(response: &ApiResponse, endpoint: &str) -> Result<Vec<Event>> {
    if !response.is_success() {
        warn!(status = response.status, endpoint, "backend returned non-success status");
    }
    response
        .decode::<Vec<Event>>()
        .with_context(|| {
            format!(
                "unexpected payload from {} (status {})",
                endpoint, response.status
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ids(values: &[&str]) -> Vec<LocationId> {
        values.iter().map(|v| LocationId(v.to_string())).collect()
    }

    fn gateway_for(server: &MockServer, lookup: LocationLookup) -> HttpEventsGateway {
        let config = RuntimeConfig {
            base_url: server.uri(),
            api_token: None,
            request_timeout_seconds: None,
            location_lookup: lookup,
            log_dir: None,
        };
        HttpEventsGateway::new(ApiClient::new(&config).expect("client"), &config)
    }

    fn events_body() -> serde_json::Value {
        json!([
            {"eventName": "Jazz Night", "locationCountry": {"_id": "1", "country": "France"}},
            {"eventName": "Tech Meetup", "locationCountry": {"_id": "2", "country": "Spain"}}
        ])
    }

    #[test]
    fn path_endpoint_joins_ids_with_commas() {
        let endpoint =
            location_endpoint(LocationLookup::Path, &ids(&["1", "2", "1"])).expect("endpoint");
        assert_eq!(endpoint, "/events/location/1,2,1");
    }

    #[test]
    fn path_endpoint_escapes_reserved_characters() {
        let endpoint = location_endpoint(LocationLookup::Path, &ids(&["a/b", "c d", "e?f"]))
            .expect("endpoint");
        assert_eq!(endpoint, "/events/location/a%2Fb,c%20d,e%3Ff");
    }

    #[test]
    fn query_endpoint_repeats_ids() {
        let endpoint =
            location_endpoint(LocationLookup::Query, &ids(&["1", "x&y"])).expect("endpoint");
        assert_eq!(endpoint, "/events/location?ids=1&ids=x%26y");
    }

    #[tokio::test]
    async fn list_events_decodes_backend_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events"))
            .and(header("Authorization", "Bearer null"))
            .respond_with(ResponseTemplate::new(200).set_body_json(events_body()))
            .expect(1)
            .mount(&server)
            .await;

        let events = gateway_for(&server, LocationLookup::Path)
            .list_events()
            .await
            .expect("events");
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].country(), Some("Spain"));
    }

    #[tokio::test]
    async fn location_lookup_hits_path_route() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events/location/1,1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"eventName": "Jazz Night", "locationCountry": {"_id": "1", "country": "France"}}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let events = gateway_for(&server, LocationLookup::Path)
            .list_events_by_locations(&ids(&["1", "1"]))
            .await
            .expect("events");
        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn location_lookup_hits_query_route() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events/location"))
            .and(query_param("ids", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let events = gateway_for(&server, LocationLookup::Query)
            .list_events_by_locations(&ids(&["2"]))
            .await
            .expect("events");
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn error_payload_fails_with_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
            .mount(&server)
            .await;

        let err = gateway_for(&server, LocationLookup::Path)
            .list_events()
            .await
            .expect_err("should fail");
        assert!(format!("{err:#}").contains("status 500"));
    }

    #[tokio::test]
    async fn error_status_with_event_list_still_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/events"))
            .respond_with(ResponseTemplate::new(404).set_body_json(events_body()))
            .mount(&server)
            .await;

        let events = gateway_for(&server, LocationLookup::Path)
            .list_events()
            .await
            .expect("events");
        assert_eq!(events.len(), 2);
    }
}
