//! HTTP client for the hotel API.
//!
//! Responses carry their payload under a `data` key. Write endpoints may also
//! answer with the bare record, so both shapes are accepted.

use async_trait::async_trait;
use innkeep_core::{
    application::{
        ApplicationError,
        ports::{CatalogGateway, HotelGateway, RoomGateway},
    },
    domain::{Accommodation, Hotel, HotelId, HotelPayload, Room, RoomId, RoomPayload, RoomType},
    error::{InnkeepError, InnkeepResult},
};
use reqwest::{Client, Method, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

#[derive(Deserialize)]
#[serde(untagged)]
enum Body<T> {
    Enveloped { data: T },
    Bare(T),
}

impl<T> Body<T> {
    fn into_inner(self) -> T {
        match self {
            Self::Enveloped { data } | Self::Bare(data) => data,
        }
    }
}

fn decode<T: DeserializeOwned>(operation: &'static str, bytes: &[u8]) -> InnkeepResult<T> {
    serde_json::from_slice::<Body<T>>(bytes)
        .map(Body::into_inner)
        .map_err(|e| {
            ApplicationError::InvalidResponse {
                operation,
                reason: e.to_string(),
            }
            .into()
        })
}

/// Gateway implementation backed by the REST API at `base_url`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> InnkeepResult<Self> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(InnkeepError::Configuration {
                message: format!(
                    "api.base_url must start with http:// or https://, got '{base_url}'"
                ),
            });
        }
        let client = Client::builder()
            .user_agent(concat!("innkeep/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| InnkeepError::Configuration {
                message: format!("cannot build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send a request and return the status and raw body.
    async fn exchange<B: Serialize + Sync>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> InnkeepResult<(StatusCode, Vec<u8>)> {
        let url = self.url(path);
        debug!(%method, %url, "Sending request");
        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApplicationError::transport(operation, e))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApplicationError::transport(operation, e))?;
        debug!(%status, bytes = bytes.len(), "Received response");
        Ok((status, bytes.to_vec()))
    }

    async fn get_optional<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> InnkeepResult<Option<T>> {
        let (status, bytes) = self
            .exchange::<()>(operation, Method::GET, path, None)
            .await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(status_error(operation, status));
        }
        decode(operation, &bytes).map(Some)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> InnkeepResult<T> {
        let (status, bytes) = self
            .exchange::<()>(operation, Method::GET, path, None)
            .await?;
        if !status.is_success() {
            return Err(status_error(operation, status));
        }
        decode(operation, &bytes)
    }

    async fn write<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: &B,
    ) -> InnkeepResult<T> {
        let (status, bytes) = self.exchange(operation, method, path, Some(body)).await?;
        if !status.is_success() {
            return Err(status_error(operation, status));
        }
        decode(operation, &bytes)
    }

    async fn delete(&self, operation: &'static str, path: &str) -> InnkeepResult<()> {
        let (status, _) = self
            .exchange::<()>(operation, Method::DELETE, path, None)
            .await?;
        if !status.is_success() {
            return Err(status_error(operation, status));
        }
        Ok(())
    }
}

fn status_error(operation: &'static str, status: StatusCode) -> InnkeepError {
    ApplicationError::transport(operation, format!("HTTP {status}")).into()
}

#[async_trait]
impl HotelGateway for HttpBackend {
    #[instrument(skip(self))]
    async fn list_hotels(&self) -> InnkeepResult<Vec<Hotel>> {
        self.get("list_hotels", "hoteles").await
    }

    #[instrument(skip(self))]
    async fn fetch_hotel(&self, id: HotelId) -> InnkeepResult<Option<Hotel>> {
        self.get_optional("fetch_hotel", &format!("hoteles/{id}")).await
    }

    #[instrument(skip_all)]
    async fn create_hotel(&self, payload: &HotelPayload) -> InnkeepResult<Hotel> {
        self.write("create_hotel", Method::POST, "hoteles", payload).await
    }

    #[instrument(skip(self, payload))]
    async fn update_hotel(&self, id: HotelId, payload: &HotelPayload) -> InnkeepResult<Hotel> {
        self.write("update_hotel", Method::PUT, &format!("hoteles/{id}"), payload)
            .await
    }

    #[instrument(skip(self))]
    async fn delete_hotel(&self, id: HotelId) -> InnkeepResult<()> {
        self.delete("delete_hotel", &format!("hoteles/{id}/eliminar"))
            .await
    }
}

#[async_trait]
impl RoomGateway for HttpBackend {
    /// A hotel without rooms answers 404 on this route.
    #[instrument(skip(self))]
    async fn rooms_by_hotel(&self, hotel_id: HotelId) -> InnkeepResult<Vec<Room>> {
        self.get_optional("rooms_by_hotel", &format!("habitaciones/hotel/{hotel_id}"))
            .await
            .map(Option::unwrap_or_default)
    }

    #[instrument(skip(self))]
    async fn fetch_room(&self, id: RoomId) -> InnkeepResult<Option<Room>> {
        self.get_optional("fetch_room", &format!("habitaciones/{id}"))
            .await
    }

    #[instrument(skip_all)]
    async fn create_room(&self, payload: &RoomPayload) -> InnkeepResult<Room> {
        self.write("create_room", Method::POST, "habitaciones", payload)
            .await
    }

    #[instrument(skip(self, payload))]
    async fn update_room(&self, id: RoomId, payload: &RoomPayload) -> InnkeepResult<Room> {
        self.write(
            "update_room",
            Method::PUT,
            &format!("habitaciones/{id}/editar"),
            payload,
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete_room(&self, id: RoomId) -> InnkeepResult<()> {
        self.delete("delete_room", &format!("habitaciones/{id}/eliminar"))
            .await
    }
}

#[async_trait]
impl CatalogGateway for HttpBackend {
    #[instrument(skip(self))]
    async fn list_types(&self) -> InnkeepResult<Vec<RoomType>> {
        self.get("list_types", "tipos").await
    }

    #[instrument(skip(self))]
    async fn list_accommodations(&self) -> InnkeepResult<Vec<Accommodation>> {
        self.get("list_accommodations", "acomodaciones").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let backend = HttpBackend::new("http://localhost:8000/api/").unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8000/api");
        assert_eq!(
            backend.url("habitaciones/hotel/3"),
            "http://localhost:8000/api/habitaciones/hotel/3"
        );
    }

    #[test]
    fn base_url_needs_a_scheme() {
        let err = HttpBackend::new("localhost:8000").unwrap_err();
        assert!(matches!(err, InnkeepError::Configuration { .. }));
    }

    #[test]
    fn decodes_enveloped_lists() {
        let body = br#"{"data": [{"id": 1, "tipo": "Standard", "descripcion": "Basic"}]}"#;
        let types: Vec<RoomType> = decode("list_types", body).unwrap();
        assert_eq!(types, vec![RoomType::new(1, "Standard", "Basic")]);
    }

    #[test]
    fn decodes_bare_records() {
        let body = br#"{"id": 2, "acomodacion": "Double"}"#;
        let acc: Accommodation = decode("list_accommodations", body).unwrap();
        assert_eq!(acc.label, "Double");
    }

    #[test]
    fn malformed_body_is_an_invalid_response() {
        let err = decode::<Vec<Room>>("rooms_by_hotel", b"<html>oops</html>").unwrap_err();
        assert!(matches!(
            err,
            InnkeepError::Application(ApplicationError::InvalidResponse {
                operation: "rooms_by_hotel",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn unreachable_api_is_a_transport_error() {
        // Port 9 (discard) is closed on test hosts.
        let backend = HttpBackend::new("http://127.0.0.1:9").unwrap();
        let err = backend.rooms_by_hotel(HotelId::new(1)).await.unwrap_err();
        assert!(err.is_retryable());
    }
}
