//! Pricing of finished itineraries.
//!
//! Derives the per-itinerary aggregates the output document needs and
//! provides the ascending price sort required at the output boundary.

use crate::domain::{DomainError, Itinerary, PricedItinerary};

/// Price an itinerary for the given bag count.
///
/// Pure: total price is the plain sum of `base_price + bag_price *
/// bag_count` over legs, bag capacity is the minimum across legs, and
/// travel time runs from the first departure to the last arrival.
///
/// # Errors
///
/// Returns [`DomainError::EmptyItinerary`] if the itinerary somehow has
/// zero legs. The `Itinerary` type forbids that at construction, so
/// this is a guard against the invariant changing, not a path the
/// planner can reach.
pub fn price(itinerary: &Itinerary, bag_count: u32) -> Result<PricedItinerary, DomainError> {
    let legs = itinerary.legs();
    if legs.is_empty() {
        return Err(DomainError::EmptyItinerary);
    }

    let total_price = legs.iter().map(|f| f.price_with_bags(bag_count)).sum();
    let bags_allowed = legs.iter().map(|f| f.bags_allowed).min().unwrap_or(0);

    Ok(PricedItinerary {
        total_price,
        bags_allowed,
        bags_count: bag_count,
        travel_time: itinerary.travel_time(),
        itinerary: itinerary.clone(),
    })
}

/// Sort itineraries ascending by total price.
///
/// The sort is stable, so equal prices keep the planner's enumeration
/// order.
pub fn sort_by_total_price(itineraries: &mut [PricedItinerary]) {
    itineraries.sort_by(|a, b| {
        a.total_price
            .partial_cmp(&b.total_price)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
