//! Star ratings of organisms.

pub mod ui;

use contracts::shared::envelope::ApiResponse;

use crate::shared::context::PageContext;
use crate::shared::control::{BusyGuard, Control};
use crate::shared::dispatch::{dispatch, fail, refuse, Outcome};
use crate::shared::forms::FormSubmission;
use crate::shared::http::ApiRequest;
use crate::shared::notify::AlertLevel;

pub const BUSY_LABEL: &str = "Guardando...";
pub const SUBMIT_LABEL: &str = "Guardar Calificación";
pub const GENERIC_ERROR: &str = "Error al guardar la calificación";

pub const STAR_ON: &str = "#ffc107";
pub const STAR_OFF: &str = "#ddd";

/// Post a rating form.
pub async fn submit_rating<C: Control + ?Sized>(
    ctx: &PageContext,
    submission: FormSubmission,
    submit: &C,
) -> Outcome {
    if submit.is_disabled() {
        return Outcome::Busy;
    }
    let mut guard = BusyGuard::engage(submit, Some(BUSY_LABEL));
    guard.set_final_label(SUBMIT_LABEL);

    let request = ApiRequest::form(submission.action, submission.fields);
    let response: ApiResponse = match dispatch(ctx, &request).await {
        Ok(response) => response,
        Err(e) => return fail(ctx, &request.url, e, GENERIC_ERROR),
    };
    if !response.success {
        return refuse(ctx, &request.url, response.message);
    }

    ctx.notifier.notify(AlertLevel::Success, &response.message);
    Outcome::Completed
}

/// Value of the star label at `index`: its `data-value`, else `5 - index`
/// (labels are laid out from five stars down).
pub fn label_value(data_value: Option<&str>, index: usize) -> f64 {
    data_value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(5.0 - index as f64)
}

/// Colour of every star label once `selected` is chosen.
pub fn star_colors(selected: f64, label_values: &[f64]) -> Vec<&'static str> {
    label_values
        .iter()
        .map(|value| if *value <= selected { STAR_ON } else { STAR_OFF })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::context::testing::TestPage;
    use crate::shared::control::testing::FakeButton;
    use crate::shared::error::RequestError;
    use crate::shared::http::testing::FakeTransport;
    use futures::executor::block_on;
    use futures::FutureExt;

    fn rating_form() -> FormSubmission {
        FormSubmission {
            action: "/rate_organism/3".into(),
            fields: vec![
                ("risk_level".into(), "4".into()),
                ("profitability_potential".into(), "3.5".into()),
                ("agility_bureaucracy".into(), "2".into()),
                ("transparency".into(), "5".into()),
            ],
        }
    }

    #[test]
    fn test_rating_saved() {
        let page = TestPage::new(
            FakeTransport::replying(r#"{"success": true, "message": "Calificación guardada exitosamente"}"#),
            true,
        );
        let submit = FakeButton::new(SUBMIT_LABEL, &[]);

        let outcome = block_on(submit_rating(&page.ctx, rating_form(), &submit));

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(submit.label(), SUBMIT_LABEL);
        assert!(!submit.is_disabled());
        assert_eq!(
            page.sink.last(),
            Some((
                AlertLevel::Success,
                "Calificación guardada exitosamente".to_string()
            ))
        );
        assert_eq!(page.transport.sent.borrow()[0].url, "/rate_organism/3");
    }

    #[test]
    fn test_label_reset_after_failure() {
        let page = TestPage::new(
            FakeTransport::with_status(500, "Internal Server Error"),
            true,
        );
        let submit = FakeButton::new("Calificar", &[]);

        let outcome = block_on(submit_rating(&page.ctx, rating_form(), &submit));

        assert_eq!(outcome, Outcome::Failed(RequestError::Status(500)));
        assert_eq!(submit.label(), SUBMIT_LABEL);
        assert!(!submit.is_disabled());
        assert_eq!(
            page.sink.last(),
            Some((AlertLevel::Danger, GENERIC_ERROR.to_string()))
        );
    }

    #[test]
    fn test_double_submit_is_busy() {
        let page = TestPage::new(FakeTransport::hanging(), true);
        let submit = FakeButton::new(SUBMIT_LABEL, &[]);

        let mut first = Box::pin(submit_rating(&page.ctx, rating_form(), &submit));
        assert!(first.as_mut().now_or_never().is_none());
        assert_eq!(submit.busy.borrow().as_deref(), Some(BUSY_LABEL));

        let second = block_on(submit_rating(&page.ctx, rating_form(), &submit));

        assert_eq!(second, Outcome::Busy);
        assert_eq!(page.transport.request_count(), 1);
        assert_eq!(submit.disable_count.get(), 1);
        drop(first);
        assert_eq!(submit.label(), SUBMIT_LABEL);
        assert!(!submit.is_disabled());
    }

    #[test]
    fn test_refusal_shows_server_message() {
        let page = TestPage::new(
            FakeTransport::replying(r#"{"success": false, "message": "Valor fuera de rango"}"#),
            true,
        );
        let submit = FakeButton::new(SUBMIT_LABEL, &[]);

        let outcome = block_on(submit_rating(&page.ctx, rating_form(), &submit));

        assert_eq!(outcome, Outcome::Refused("Valor fuera de rango".into()));
        assert_eq!(submit.label(), SUBMIT_LABEL);
        assert!(!submit.is_disabled());
    }

    #[test]
    fn test_label_value_fallback() {
        assert_eq!(label_value(Some("3"), 0), 3.0);
        assert_eq!(label_value(None, 0), 5.0);
        assert_eq!(label_value(None, 4), 1.0);
        assert_eq!(label_value(Some("x"), 1), 4.0);
    }

    #[test]
    fn test_star_colors() {
        let values: Vec<f64> = (0..5).map(|i| label_value(None, i)).collect();
        assert_eq!(
            star_colors(3.0, &values),
            vec![STAR_OFF, STAR_OFF, STAR_ON, STAR_ON, STAR_ON]
        );
        assert_eq!(star_colors(0.0, &values), vec![STAR_OFF; 5]);
    }
}
