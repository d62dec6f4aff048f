//! Dispatch of UI actions into the directory controller.

use directory::{DirectoryController, SubmitOutcome};
use shared::error::ValidationError;

use crate::controller::events::UiAction;

/// Applies one action. A rejected submission is handed back so the form can
/// mark the offending fields; the controller has already queued its toast.
pub fn dispatch_action(
    controller: &mut DirectoryController,
    action: UiAction,
) -> Option<ValidationError> {
    tracing::debug!(action = action.name(), "dispatching ui action");

    match action {
        UiAction::OpenAddForm => controller.open_add_form(),
        UiAction::OpenEditForm(id) => {
            controller.open_edit_form(id);
        }
        UiAction::CancelForm => controller.cancel_form(),
        UiAction::SubmitForm => match controller.submit() {
            Ok(SubmitOutcome::Added(id)) | Ok(SubmitOutcome::Updated(id)) => {
                tracing::debug!(employee_id = %id, "form submitted");
            }
            Ok(SubmitOutcome::Vanished(id)) => {
                tracing::debug!(employee_id = %id, "form target vanished before submit");
            }
            Err(err) => return Some(err),
        },
        UiAction::Delete(id) => {
            controller.delete(id);
        }
        UiAction::SetDepartmentFilter(filter) => controller.set_selected_department(filter),
    }
    None
}
