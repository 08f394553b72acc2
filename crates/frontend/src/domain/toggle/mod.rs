//! Enable/disable toggles for investments and organisms.
//!
//! Both kinds share one code path; everything kind-specific lives in a
//! `ResourceView`.

pub mod ui;

use contracts::domain::resource_kind::ResourceKind;
use contracts::domain::toggle::ToggleResponse;

use crate::shared::context::PageContext;
use crate::shared::control::{BusyGuard, Control, Styled};
use crate::shared::dispatch::{dispatch, fail, refuse, Outcome};
use crate::shared::error::RequestError;
use crate::shared::http::ApiRequest;
use crate::shared::notify::AlertLevel;

pub const BUSY_LABEL: &str = "Procesando...";
pub const GENERIC_ERROR: &str = "Error al procesar la solicitud";

/// Label and colour class of a toggle button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonFace {
    pub label: &'static str,
    pub class: &'static str,
}

/// Shown while the resource is enabled: pressing it disables.
pub const DISABLE_FACE: ButtonFace = ButtonFace {
    label: "Deshabilitar",
    class: "btn-warning",
};

/// Shown while the resource is disabled: pressing it enables.
pub const ENABLE_FACE: ButtonFace = ButtonFace {
    label: "Habilitar",
    class: "btn-success",
};

/// Page-side description of a resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceView {
    pub kind: ResourceKind,
    pub toggle_selector: &'static str,
    pub id_attribute: &'static str,
    pub disabled_class: &'static str,
    pub confirm_prompt: &'static str,
    pub chat_form_selector: &'static str,
    pub chat_list_selector: &'static str,
}

pub const INVESTMENT_VIEW: ResourceView = ResourceView {
    kind: ResourceKind::Investment,
    toggle_selector: ".toggle-investment",
    id_attribute: "data-investment-id",
    disabled_class: "disabled-investment",
    confirm_prompt: "¿Estás seguro de que deseas cambiar el estado de esta inversión?",
    chat_form_selector: ".investment-chat-form",
    chat_list_selector: ".investment-chat-messages",
};

pub const ORGANISM_VIEW: ResourceView = ResourceView {
    kind: ResourceKind::Organism,
    toggle_selector: ".toggle-organism",
    id_attribute: "data-organism-id",
    disabled_class: "disabled-organism",
    confirm_prompt: "¿Estás seguro de que deseas cambiar el estado de este organismo?",
    chat_form_selector: ".organism-chat-form",
    chat_list_selector: ".organism-chat-messages",
};

impl ResourceView {
    pub fn of(kind: ResourceKind) -> &'static ResourceView {
        match kind {
            ResourceKind::Investment => &INVESTMENT_VIEW,
            ResourceKind::Organism => &ORGANISM_VIEW,
        }
    }

    pub fn toggle_url(&self, id: &str) -> String {
        self.kind.toggle_path(&urlencoding::encode(id))
    }
}

/// Reflect the new enabled state on the card and the button.
///
/// Touches exactly the kind's disabled class on the card and the two colour
/// classes on the button; the label is written when the guard releases.
pub fn apply_toggle_state<C: Control + ?Sized>(
    view: &ResourceView,
    card: Option<&dyn Styled>,
    guard: &mut BusyGuard<'_, C>,
    enabled: bool,
) {
    if let Some(card) = card {
        card.set_class(view.disabled_class, !enabled);
    }
    let (shown, hidden) = if enabled {
        (DISABLE_FACE, ENABLE_FACE)
    } else {
        (ENABLE_FACE, DISABLE_FACE)
    };
    guard.control().set_class(hidden.class, false);
    guard.control().set_class(shown.class, true);
    guard.set_final_label(shown.label);
}

/// Ask, flip the resource on the server, update the page.
pub async fn toggle_resource<C: Control + ?Sized>(
    ctx: &PageContext,
    view: &ResourceView,
    id: &str,
    button: &C,
    card: Option<&dyn Styled>,
) -> Outcome {
    if button.is_disabled() {
        return Outcome::Busy;
    }
    if !ctx.confirm.confirm(view.confirm_prompt) {
        return Outcome::Cancelled;
    }

    let mut guard = BusyGuard::engage(button, Some(BUSY_LABEL));
    let request = ApiRequest::empty(view.toggle_url(id));

    let response: ToggleResponse = match dispatch(ctx, &request).await {
        Ok(response) => response,
        Err(e) => return fail(ctx, &request.url, e, GENERIC_ERROR),
    };
    if !response.success {
        return refuse(ctx, &request.url, response.message);
    }
    let Some(enabled) = response.new_state() else {
        return fail(
            ctx,
            &request.url,
            RequestError::Malformed("toggle response without 'enabled'"),
            GENERIC_ERROR,
        );
    };

    apply_toggle_state(view, card, &mut guard, enabled);
    ctx.notifier.notify(AlertLevel::Success, &response.message);
    Outcome::Completed
}
