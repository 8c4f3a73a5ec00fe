use std::cell::RefCell;

use maud::Markup;

use livability_boundary::{ApiResponse, Coordinate};

use crate::{render, sequence::RequestSequence, view_state::ViewState, DisplayRegion, LivabilityGateway};

/// Renders the livability summary, the nearby facilities
/// and the popup at the map marker.
#[derive(Debug)]
pub struct LivabilityReporter<R> {
    summary: R,
    facilities: R,
    popup: R,
    sequence: RequestSequence,
}

impl<R> LivabilityReporter<R>
where
    R: DisplayRegion,
{
    pub fn new(summary: R, facilities: R, popup: R) -> Self {
        Self {
            summary,
            facilities,
            popup,
            sequence: RequestSequence::new(),
        }
    }

    pub async fn report<G>(&self, gateway: &G, view_state: &RefCell<ViewState>, at: Coordinate)
    where
        G: LivabilityGateway,
    {
        let token = self.sequence.dispatch();
        let response = gateway.livability(at).await;
        if !self.sequence.is_current(token) {
            log::debug!("Discard outdated livability response for {at:?}");
            return;
        }
        match response {
            Ok(ApiResponse::Success(livability)) => {
                self.summary.show(render::livability_summary(&livability));
                self.facilities
                    .show(render::livability_facilities(&livability));
                if view_state.borrow().has_marker() {
                    self.popup.show(render::livability_popup(&livability));
                }
            }
            Ok(ApiResponse::Failure(err)) => {
                log::debug!("Livability is not available at {at:?}: {err}");
                self.summary.show(render::livability_error(&err.error));
                self.facilities.show(render::no_facilities_data());
            }
            Err(err) => {
                log::error!("Error fetching livability: {err}");
                self.summary.show(render::livability_fetch_error());
                self.facilities.show(render::no_facilities_data());
            }
        }
    }

    /// Replaces the summary with a notice.
    ///
    /// Pending responses are discarded.
    pub fn notify(&self, notice: Markup) {
        self.sequence.dispatch();
        self.summary.show(notice);
    }
}

#[cfg(test)]
mod tests {
    use futures::{channel::oneshot, executor::block_on, join};

    use super::*;
    use crate::tests::*;

    #[test]
    fn render_success() {
        let gateway = FakeGateway::default();
        let regions = FakeRegions::default();
        let reporter = regions.livability_reporter();
        let view_state = RefCell::new(ViewState::default());
        view_state.borrow_mut().place_marker(HYDERABAD);

        block_on(reporter.report(&gateway, &view_state, HYDERABAD));

        assert_eq!(gateway.calls(), vec![format!("livability {HYDERABAD:?}")]);
        assert!(regions.summary.last().contains("Good for Living"));
        assert!(regions.facilities.last().contains("<strong>Hospital</strong>"));
        assert_eq!(
            regions.popup.last(),
            "<div><strong>Livability: 82 (Good for Living)</strong></div>"
        );
    }

    #[test]
    fn no_popup_without_marker() {
        let gateway = FakeGateway::default();
        let regions = FakeRegions::default();
        let reporter = regions.livability_reporter();
        let view_state = RefCell::new(ViewState::default());

        block_on(reporter.report(&gateway, &view_state, HYDERABAD));

        assert!(regions.summary.last().contains("Good for Living"));
        assert!(regions.popup.is_empty());
    }

    #[test]
    fn out_of_coverage_area() {
        let gateway = FakeGateway {
            livability: Some(Ok(ApiResponse::Failure(api_error("Out of coverage area")))),
            ..Default::default()
        };
        let regions = FakeRegions::default();
        let reporter = regions.livability_reporter();
        let view_state = RefCell::new(ViewState::default());

        block_on(reporter.report(&gateway, &view_state, HYDERABAD));

        assert_eq!(
            regions.summary.last(),
            r#"<li class="list-group-item text-danger">Out of coverage area</li>"#
        );
        assert_eq!(
            regions.facilities.last(),
            r#"<li class="list-group-item">No facilities data.</li>"#
        );
        assert!(regions.popup.is_empty());
    }

    #[test]
    fn transport_failure() {
        let gateway = FakeGateway {
            livability: Some(Err(FetchError::Transport("connection refused".into()))),
            ..Default::default()
        };
        let regions = FakeRegions::default();
        let reporter = regions.livability_reporter();
        let view_state = RefCell::new(ViewState::default());

        block_on(reporter.report(&gateway, &view_state, HYDERABAD));

        assert!(regions.summary.last().contains("Error fetching data."));
        assert!(regions.facilities.last().contains("No facilities data."));
    }

    #[test]
    fn discard_outdated_response() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let gateway = PendingGateway::new(vec![first_rx, second_rx]);
        let regions = FakeRegions::default();
        let reporter = regions.livability_reporter();
        let view_state = RefCell::new(ViewState::default());

        let complete_in_reverse_order = async {
            second_tx
                .send(Ok(ApiResponse::Success(livability_with_score(2.0))))
                .unwrap();
            yield_now().await;
            first_tx
                .send(Ok(ApiResponse::Success(livability_with_score(1.0))))
                .unwrap();
        };
        block_on(async {
            join!(
                reporter.report(&gateway, &view_state, HYDERABAD),
                reporter.report(&gateway, &view_state, WARANGAL),
                complete_in_reverse_order,
            )
        });

        assert_eq!(regions.summary.len(), 1);
        assert!(regions
            .summary
            .last()
            .contains(r#"<span class="badge bg-success">2</span>"#));
    }

    #[test]
    fn notice_supersedes_pending_response() {
        let (tx, rx) = oneshot::channel();
        let gateway = PendingGateway::new(vec![rx]);
        let regions = FakeRegions::default();
        let reporter = regions.livability_reporter();
        let view_state = RefCell::new(ViewState::default());

        let notify_then_complete = async {
            reporter.notify(render::place_not_found("Atlantis"));
            tx.send(Ok(ApiResponse::Success(livability_with_score(3.0))))
                .unwrap();
        };
        block_on(async {
            join!(
                reporter.report(&gateway, &view_state, HYDERABAD),
                notify_then_complete
            )
        });

        assert_eq!(regions.summary.len(), 1);
        assert!(regions.summary.last().contains("Atlantis"));
        assert!(regions.facilities.is_empty());
    }
}
