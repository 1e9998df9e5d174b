use thiserror::Error;

use crate::domain::{Draft, FieldName, validate};

use super::{
    actions::{
        ADDED_MESSAGE, DELETED_MESSAGE, EDIT_CANCELLED_MESSAGE, EDITING_MESSAGE, Effect,
        Notification, SessionAction, UPDATED_MESSAGE,
    },
    state::{EditState, PendingDelete, SessionState},
};

/// Precondition violations. None of them change the state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("record {index} does not exist (store holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("a delete confirmation is still open")]
    ConfirmationPending,
    #[error("no delete confirmation is open")]
    NoPendingConfirmation,
}

/// The next state together with the effects the transition produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub state: SessionState,
    pub effects: Vec<Effect>,
}

/// Applies `action` to `state` and returns the next state. `state` itself is
/// never touched.
pub fn reduce(state: &SessionState, action: SessionAction) -> Result<Reduction, ActionError> {
    if state.pending.is_some()
        && !matches!(
            action,
            SessionAction::ConfirmDelete | SessionAction::CancelDelete
        )
    {
        return Err(ActionError::ConfirmationPending);
    }

    let mut next = state.clone();
    let mut effects = Vec::new();
    match action {
        SessionAction::EditField { field, value } => edit_field(&mut next, field, value),
        SessionAction::Submit => submit(&mut next, &mut effects),
        SessionAction::BeginEdit(index) => begin_edit(&mut next, index, &mut effects)?,
        SessionAction::CancelEdit => cancel_edit(&mut next, &mut effects),
        SessionAction::RequestDelete(index) => request_delete(&mut next, index, &mut effects)?,
        SessionAction::ConfirmDelete => confirm_delete(&mut next, &mut effects)?,
        SessionAction::CancelDelete => {
            next.pending
                .take()
                .ok_or(ActionError::NoPendingConfirmation)?;
        }
    }
    Ok(Reduction {
        state: next,
        effects,
    })
}

fn edit_field(state: &mut SessionState, field: FieldName, value: String) {
    state.draft.set(field, value);
    // once a submit has failed, keep that field's message in step with its text
    if state.errors.is_empty() {
        return;
    }
    match validate(&state.draft) {
        Ok(_) => state.errors.clear(),
        Err(all) => match all.get(field) {
            Some(error) => state.errors.insert(error.clone()),
            None => {
                state.errors.remove(field);
            }
        },
    }
}

fn submit(state: &mut SessionState, effects: &mut Vec<Effect>) {
    let record = match validate(&state.draft) {
        Ok(record) => record,
        Err(errors) => {
            state.errors = errors.clone();
            effects.push(Effect::Rejected(errors));
            return;
        }
    };
    let message = match state.edit {
        EditState::Editing(index) => {
            state.records[index] = record;
            UPDATED_MESSAGE
        }
        EditState::None => {
            state.records.push(record);
            ADDED_MESSAGE
        }
    };
    state.reset_form();
    effects.push(Effect::Notify(Notification::success(message)));
}

fn begin_edit(
    state: &mut SessionState,
    index: usize,
    effects: &mut Vec<Effect>,
) -> Result<(), ActionError> {
    state.check_index(index)?;
    state.draft = Draft::from(&state.records[index]);
    state.errors.clear();
    state.edit = EditState::Editing(index);
    effects.push(Effect::Notify(Notification::info(EDITING_MESSAGE)));
    Ok(())
}

fn cancel_edit(state: &mut SessionState, effects: &mut Vec<Effect>) {
    if !state.edit.is_editing() {
        return;
    }
    state.reset_form();
    effects.push(Effect::Notify(Notification::info(EDIT_CANCELLED_MESSAGE)));
}

fn request_delete(
    state: &mut SessionState,
    index: usize,
    effects: &mut Vec<Effect>,
) -> Result<(), ActionError> {
    state.check_index(index)?;
    state.pending = Some(PendingDelete { index });
    effects.push(Effect::ConfirmDelete {
        index,
        record: state.records[index].clone(),
    });
    Ok(())
}

fn confirm_delete(state: &mut SessionState, effects: &mut Vec<Effect>) -> Result<(), ActionError> {
    let PendingDelete { index } = state
        .pending
        .take()
        .ok_or(ActionError::NoPendingConfirmation)?;
    state.records.remove(index);
    match state.edit {
        EditState::Editing(editing) if editing == index => state.reset_form(),
        // the record under edit slid down one slot; follow it
        EditState::Editing(editing) if editing > index => {
            state.edit = EditState::Editing(editing - 1);
        }
        _ => {}
    }
    effects.push(Effect::Notify(Notification::success(DELETED_MESSAGE)));
    Ok(())
}
