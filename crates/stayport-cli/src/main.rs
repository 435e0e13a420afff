//! Stayport CLI — browse the catalog and quote a stay from the
//! command line.

use chrono::{Days, Utc};
use stayport_core::gateway::HotelCatalog;
use stayport_core::models::hotel::HotelFilter;
use stayport_core::pricing;
use stayport_core::source::DataSource;
use stayport_gateway::RestGateway;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("stayport=info".parse().unwrap()),
        )
        .init();

    let gateway = RestGateway::from_env();
    tracing::info!(base_url = %gateway.config().base_url, "Querying hotel catalog");

    let hotels = match gateway.list_hotels(None, &HotelFilter::default()).await {
        Ok(hotels) => hotels,
        Err(err) => {
            eprintln!("Failed to list hotels: {err}");
            std::process::exit(1);
        }
    };

    if hotels.source == DataSource::Fallback {
        println!("Backend unreachable; showing demo data.\n");
    }

    for hotel in &hotels.data {
        println!(
            "#{:<4} {:<20} {:<24} {:.1}★  ${:.2}/night",
            hotel.id, hotel.name, hotel.location, hotel.rating, hotel.price_per_night
        );
    }

    // Quote a sample three-night stay at the first hotel.
    if let Some(hotel) = hotels.data.first() {
        let check_in = Utc::now().date_naive() + Days::new(14);
        let check_out = check_in + Days::new(3);
        let quote = pricing::quote(check_in, check_out, hotel.price_per_night).rounded();
        println!(
            "\n{} nights at {} ({} to {}): ${:.2} + ${:.2} tax = ${:.2}",
            quote.nights, hotel.name, check_in, check_out, quote.subtotal, quote.tax, quote.total
        );
    }
}
