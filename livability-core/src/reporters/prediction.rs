use livability_boundary::ApiResponse;

use crate::{render, sequence::RequestSequence, DisplayRegion, LivabilityGateway};

/// Renders the model based prediction of a city.
///
/// Does nothing if there is no region to render into.
#[derive(Debug)]
pub struct PredictionReporter<R> {
    region: Option<R>,
    sequence: RequestSequence,
}

impl<R> PredictionReporter<R>
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
        region.show(render::prediction_loading());
        let response = gateway.predict(city).await;
        if !self.sequence.is_current(token) {
            log::debug!("Discard outdated prediction for {city}");
            return;
        }
        match response {
            Ok(ApiResponse::Success(prediction)) => {
                region.show(render::prediction(&prediction));
            }
            Ok(ApiResponse::Failure(err)) => {
                log::debug!("No prediction available for {city}: {err}");
                region.show(render::prediction_error(&err));
            }
            Err(err) => {
                log::error!("Error fetching ML prediction: {err}");
                region.show(render::prediction_fetch_error());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::{channel::oneshot, executor::block_on, join};
    use livability_boundary::Error;

    use super::*;
    use crate::tests::*;

    #[test]
    fn loading_then_prediction() {
        let gateway = FakeGateway::default();
        let region = Recorder::default();
        let reporter = PredictionReporter::new(Some(&region));

        block_on(reporter.report(&gateway, "Warangal"));

        assert_eq!(gateway.calls(), vec!["predict Warangal".to_string()]);
        let shown = region.all();
        assert_eq!(shown.len(), 2);
        assert!(shown[0].contains("Loading ML prediction..."));
        assert!(shown[1].contains("<strong>ML Prediction:</strong> Suitable"));
    }

    #[test]
    fn city_not_found() {
        let gateway = FakeGateway {
            prediction: Some(Ok(ApiResponse::Failure(Error {
                error: "City not found".into(),
                suggestions: Some(vec!["Hyderabad".into(), "Warangal".into()]),
            }))),
            ..Default::default()
        };
        let region = Recorder::default();
        let reporter = PredictionReporter::new(Some(&region));

        block_on(reporter.report(&gateway, "Xyzabc"));

        let last = region.last();
        assert!(last.contains("City not found"));
        assert!(last.contains("Hyderabad, Warangal"));
    }

    #[test]
    fn transport_failure() {
        let gateway = FakeGateway {
            prediction: Some(Err(FetchError::Decode("expected value".into()))),
            ..Default::default()
        };
        let region = Recorder::default();
        let reporter = PredictionReporter::new(Some(&region));

        block_on(reporter.report(&gateway, "Warangal"));

        assert!(region.last().contains("Error fetching ML prediction."));
    }

    #[test]
    fn skip_without_region() {
        let gateway = FakeGateway::default();
        let reporter = PredictionReporter::<&Recorder>::new(None);

        block_on(reporter.report(&gateway, "Warangal"));

        assert!(gateway.calls().is_empty());
    }

    #[test]
    fn discard_outdated_prediction() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let gateway = PendingGateway::default().with_predictions(vec![first_rx, second_rx]);
        let region = Recorder::default();
        let reporter = PredictionReporter::new(Some(&region));

        let complete_in_reverse_order = async {
            second_tx
                .send(Ok(ApiResponse::Success(prediction_for("Warangal"))))
                .unwrap();
            yield_now().await;
            first_tx
                .send(Ok(ApiResponse::Success(prediction_for("Hyderabad"))))
                .unwrap();
        };
        block_on(async {
            join!(
                reporter.report(&gateway, "Hyderabad"),
                reporter.report(&gateway, "Warangal"),
                complete_in_reverse_order,
            )
        });

        assert!(region.last().contains("Warangal, Telangana"));
        assert!(region.all().iter().all(|m| !m.contains("Hyderabad")));
    }
}
