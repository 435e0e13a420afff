//! REST implementation of the `stayport-core` gateway traits.
//!
//! One attempt per call, no retry or backoff. Transport-level failures
//! degrade per operation class: reads serve the substitute dataset,
//! auth fails with `ServiceUnavailable`, and the remaining mutations
//! return a tagged placeholder so callers can see nothing persisted.

use chrono::Utc;
use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use stayport_core::error::{StayError, StayResult};
use stayport_core::gateway::{AuthGateway, BookingDesk, HotelCatalog, Inventory};
use stayport_core::models::booking::{Booking, CreateBooking};
use stayport_core::models::hotel::{CreateHotel, Hotel, HotelFilter, UpdateHotel};
use stayport_core::models::room::{CreateRoom, Room};
use stayport_core::models::session::Session;
use stayport_core::models::user::{AuthResponse, LoginRequest, RegisterRequest};
use stayport_core::source::Sourced;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::fallback;

/// Error body shape the backend uses for rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Build a [`GatewayError::Rejected`] from a non-success response,
/// preferring the server-supplied message.
async fn rejection(response: reqwest::Response) -> GatewayError {
    let status = response.status().as_u16();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| format!("Error: {status}"));
    GatewayError::Rejected { status, message }
}

/// REST gateway client.
///
/// The underlying `reqwest::Client` pools connections internally;
/// one gateway per process is the intended usage.
pub struct RestGateway {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl RestGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Gateway against the environment-configured backend origin.
    pub fn from_env() -> Self {
        Self::new(GatewayConfig::from_env())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Attach the bearer token when a session is present; anonymous
    /// requests go out without an Authorization header.
    fn authed(&self, builder: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
        match session {
            Some(s) => builder.bearer_auth(&s.token),
            None => builder,
        }
    }

    /// Issue the request and decode a JSON body.
    ///
    /// Non-success statuses become [`GatewayError::Rejected`] carrying
    /// the server-supplied message when one is parseable.
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, GatewayError> {
        let response = builder.send().await.map_err(GatewayError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        response.json::<T>().await.map_err(GatewayError::from_reqwest)
    }

    /// Issue the request and discard the body (DELETE responses).
    async fn execute_unit(&self, builder: RequestBuilder) -> Result<(), GatewayError> {
        let response = builder.send().await.map_err(GatewayError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(())
    }
}

impl AuthGateway for RestGateway {
    async fn login(&self, credentials: LoginRequest) -> StayResult<Session> {
        debug!(email = %credentials.email, "login");
        let builder = self.http.post(self.url("/auth/login")).json(&credentials);
        // Transport failures surface as ServiceUnavailable; a login is
        // never served from fallback data.
        let resp: AuthResponse = self.execute(builder).await?;
        Ok(Session::from(resp))
    }

    async fn register(&self, input: RegisterRequest) -> StayResult<Session> {
        debug!(email = %input.email, "register");
        let builder = self.http.post(self.url("/auth/register")).json(&input);
        let resp: AuthResponse = self.execute(builder).await?;
        Ok(Session::from(resp))
    }
}

impl HotelCatalog for RestGateway {
    async fn list_hotels(
        &self,
        session: Option<&Session>,
        filter: &HotelFilter,
    ) -> StayResult<Sourced<Vec<Hotel>>> {
        let builder = self
            .authed(self.http.get(self.url("/hotels")), session)
            .query(&filter.query_pairs());

        match self.execute(builder).await {
            Ok(hotels) => Ok(Sourced::live(hotels)),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, "backend unreachable, serving substitute hotel list");
                Ok(Sourced::fallback(fallback::sample_hotels()))
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn get_hotel(&self, session: Option<&Session>, id: i64) -> StayResult<Sourced<Hotel>> {
        let builder = self.authed(self.http.get(self.url(&format!("/hotels/{id}"))), session);

        match self.execute(builder).await {
            Ok(hotel) => Ok(Sourced::live(hotel)),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, hotel_id = id, "backend unreachable, serving substitute hotel");
                Ok(Sourced::fallback(fallback::sample_hotel(id)))
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn list_rooms(
        &self,
        session: Option<&Session>,
        hotel_id: i64,
    ) -> StayResult<Sourced<Vec<Room>>> {
        let builder = self.authed(
            self.http.get(self.url(&format!("/hotels/{hotel_id}/rooms"))),
            session,
        );

        match self.execute(builder).await {
            Ok(rooms) => Ok(Sourced::live(rooms)),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, hotel_id, "backend unreachable, serving substitute room list");
                Ok(Sourced::fallback(fallback::sample_rooms(hotel_id)))
            }
            Err(other) => Err(other.into()),
        }
    }
}

impl BookingDesk for RestGateway {
    async fn create_booking(
        &self,
        session: &Session,
        input: &CreateBooking,
        capacity: Option<u32>,
    ) -> StayResult<Sourced<Booking>> {
        // Submission boundary: reject bad stays and guest counts
        // before any network I/O.
        input.validate(capacity)?;

        let builder = self
            .authed(self.http.post(self.url("/bookings")), Some(session))
            .json(input);

        match self.execute(builder).await {
            Ok(booking) => Ok(Sourced::live(booking)),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, "backend unreachable, booking NOT persisted");
                Ok(Sourced::fallback(Booking::default()))
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn list_my_bookings(&self, session: &Session) -> StayResult<Sourced<Vec<Booking>>> {
        let builder = self.authed(self.http.get(self.url("/bookings/user")), Some(session));

        match self.execute(builder).await {
            Ok(bookings) => Ok(Sourced::live(bookings)),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, "backend unreachable, serving substitute booking list");
                Ok(Sourced::fallback(fallback::sample_bookings()))
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn list_all_bookings(&self, session: &Session) -> StayResult<Sourced<Vec<Booking>>> {
        let builder = self.authed(self.http.get(self.url("/bookings/all")), Some(session));

        match self.execute(builder).await {
            Ok(bookings) => Ok(Sourced::live(bookings)),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, "backend unreachable, serving substitute booking list");
                Ok(Sourced::fallback(fallback::sample_bookings()))
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn cancel_booking(&self, session: &Session, booking: &Booking) -> StayResult<Sourced<()>> {
        // Cancellation policy is enforced here, not just in the UI:
        // only bookings still classified Upcoming may be cancelled.
        let today = Utc::now().date_naive();
        if !booking.is_cancellable(today) {
            return Err(StayError::validation(
                "only upcoming bookings can be cancelled",
            ));
        }

        let builder = self.authed(
            self.http.delete(self.url(&format!("/bookings/{}", booking.id))),
            Some(session),
        );

        match self.execute_unit(builder).await {
            Ok(()) => Ok(Sourced::live(())),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, booking_id = booking.id, "backend unreachable, cancel NOT persisted");
                Ok(Sourced::fallback(()))
            }
            Err(other) => Err(other.into()),
        }
    }
}

impl Inventory for RestGateway {
    async fn create_hotel(
        &self,
        session: &Session,
        input: &CreateHotel,
    ) -> StayResult<Sourced<Hotel>> {
        let builder = self
            .authed(self.http.post(self.url("/hotels")), Some(session))
            .json(input);

        match self.execute(builder).await {
            Ok(hotel) => Ok(Sourced::live(hotel)),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, "backend unreachable, hotel NOT persisted");
                Ok(Sourced::fallback(Hotel::default()))
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn update_hotel(
        &self,
        session: &Session,
        id: i64,
        input: &UpdateHotel,
    ) -> StayResult<Sourced<Hotel>> {
        let builder = self
            .authed(self.http.put(self.url(&format!("/hotels/{id}"))), Some(session))
            .json(input);

        match self.execute(builder).await {
            Ok(hotel) => Ok(Sourced::live(hotel)),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, hotel_id = id, "backend unreachable, update NOT persisted");
                Ok(Sourced::fallback(Hotel::default()))
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn create_room(
        &self,
        session: &Session,
        hotel_id: i64,
        input: &CreateRoom,
    ) -> StayResult<Sourced<Room>> {
        let builder = self
            .authed(
                self.http.post(self.url(&format!("/hotels/{hotel_id}/rooms"))),
                Some(session),
            )
            .json(input);

        match self.execute(builder).await {
            Ok(room) => Ok(Sourced::live(room)),
            Err(GatewayError::Transport(reason)) => {
                warn!(%reason, hotel_id, "backend unreachable, room NOT persisted");
                Ok(Sourced::fallback(Room::default()))
            }
            Err(other) => Err(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let gw = RestGateway::new(GatewayConfig {
            base_url: "http://localhost:8080/api".into(),
        });
        assert_eq!(gw.url("/hotels/3/rooms"), "http://localhost:8080/api/hotels/3/rooms");
    }
}
