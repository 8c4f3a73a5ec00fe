use livability_boundary::ApiResponse;

use crate::{render, sequence::RequestSequence, DisplayRegion, LivabilityGateway};

/// Renders better rated cities nearby.
///
/// Does nothing if there is no region to render into.
#[derive(Debug)]
pub struct AlternativesReporter<R> {
    region: Option<R>,
    sequence: RequestSequence,
}

impl<R> AlternativesReporter<R>
where
    R: DisplayRegion,
{
    pub fn new(region: Option<R>) -> Self {
        Self {
            region,
            sequence: RequestSequence::new(),
        }
    }

    pub async fn report<G>(&self, gateway: &G, city: &str)
    where
        G: LivabilityGateway,
    {
        let Some(region) = &self.region else {
            return;
        };
        let token = self.sequence.dispatch();
        region.show(render::alternatives_loading());
        let response = gateway.alternatives(city).await;
        if !self.sequence.is_current(token) {
            log::debug!("Discard outdated alternatives for {city}");
            return;
        }
        match response {
            Ok(ApiResponse::Success(alternatives)) => {
                log::debug!(
                    "Found {} alternatives for {city}",
                    alternatives.suggestions.len()
                );
                region.show(render::alternatives(&alternatives));
            }
            Ok(ApiResponse::Failure(err)) => {
                region.show(render::alternatives_error(&err.error));
            }
            Err(err) => {
                log::error!("Error fetching suggestions: {err}");
                region.show(render::alternatives_fetch_error());
            }
        }
    }
}
