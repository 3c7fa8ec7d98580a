use common::{Clock, format_timestamp};
use domain::{MyTripCard, MyTripCardRecord, SaveTripRequest, Trip};
use repository::Repositories;

use crate::error::Result;

#[tracing::instrument(skip(repos))]
pub async fn list_trips(repos: &Repositories) -> Result<Vec<MyTripCard>> {
    Ok(repos.trips.list().await?)
}

/// Saves a trip stamped with the clock's current time and returns its card.
#[tracing::instrument(skip(repos, clock))]
pub async fn add_trip(
    repos: &Repositories,
    input: &SaveTripRequest,
    clock: &dyn Clock,
) -> Result<MyTripCard> {
    let trip = Trip::from(MyTripCardRecord {
        id: input.id.clone(),
        title: input.title.clone(),
        created_at: format_timestamp(clock.now()),
        thumbnail: None,
    });

    repos.trips.save(&trip).await?;

    metrics::counter!("trips_added_total").increment(1);
    tracing::info!(id = trip.id(), "trip added");

    Ok(trip.card())
}

/// Removes a trip. `false` means there was nothing to remove.
#[tracing::instrument(skip(repos))]
pub async fn delete_trip(repos: &Repositories, id: &str) -> Result<bool> {
    let removed = repos.trips.delete(id).await?;
    if removed {
        metrics::counter!("trips_deleted_total").increment(1);
    }
    Ok(removed)
}
