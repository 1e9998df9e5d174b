use recordform::{
    ActionError, DocumentFormat, Draft, EditState, Effect, FieldErrors, FieldName,
    Notification, OutputDestination, OutputOptions, Record, SessionAction, SessionEngine,
    SessionObserver, SessionState, emit, validate,
};

fn record(name: &str, email: &str, age: &str) -> Record {
    Record::try_from(Draft::new(name, email, age)).expect("valid record")
}

fn type_into(engine: &mut SessionEngine, observer: &mut Log, draft: Draft) {
    for field in FieldName::ALL {
        engine
            .dispatch(
                SessionAction::EditField {
                    field,
                    value: draft.get(field).to_string(),
                },
                observer,
            )
            .expect("typing is always accepted");
    }
}

#[derive(Default)]
struct Log {
    changes: usize,
    notifications: Vec<String>,
    rejected: Vec<usize>,
    prompts: Vec<(usize, String)>,
}

impl SessionObserver for Log {
    fn on_state_changed(&mut self, _state: &SessionState) {
        self.changes += 1;
    }

    fn on_notification(&mut self, notification: &Notification) {
        self.notifications.push(notification.message.clone());
    }

    fn on_rejected(&mut self, errors: &FieldErrors) {
        self.rejected.push(errors.len());
    }

    fn on_confirmation_requested(&mut self, index: usize, record: &Record) {
        self.prompts.push((index, record.name().to_string()));
    }
}

#[test]
fn valid_draft_is_added_to_an_empty_store() {
    let mut engine = SessionEngine::default();
    let mut log = Log::default();
    type_into(&mut engine, &mut log, Draft::new("Alice", "alice@example.com", "30"));
    engine.dispatch(SessionAction::Submit, &mut log).unwrap();

    let state = engine.state();
    assert_eq!(state.records(), &[record("Alice", "alice@example.com", "30")]);
    assert!(state.draft().is_empty());
    assert_eq!(state.edit_state(), EditState::None);
    assert_eq!(log.notifications, vec!["New record added!".to_string()]);
}

#[test]
fn boundary_ages_are_accepted_and_neighbours_rejected() {
    assert_eq!(validate(&Draft::new("A", "a@b", "18")).unwrap().age(), 18);
    assert_eq!(validate(&Draft::new("A", "a@b", "50")).unwrap().age(), 50);

    let errors = validate(&Draft::new("A", "a@b", "17")).unwrap_err();
    assert_eq!(
        errors.get(FieldName::Age).map(ToString::to_string).as_deref(),
        Some("Age must be at least 18 but you entered 17")
    );
    let errors = validate(&Draft::new("A", "a@b", "51")).unwrap_err();
    assert_eq!(
        errors.get(FieldName::Age).map(ToString::to_string).as_deref(),
        Some("Age must be at most 50 but you entered 51")
    );
}

#[test]
fn all_empty_submit_reports_three_errors_and_keeps_the_store() {
    let mut engine = SessionEngine::new(SessionState::with_records(vec![record(
        "Bob", "b@x.com", "40",
    )]));
    let mut log = Log::default();
    engine.dispatch(SessionAction::Submit, &mut log).unwrap();

    let errors = engine.state().errors();
    assert_eq!(errors.len(), 3);
    assert_eq!(
        errors.get(FieldName::Name).map(ToString::to_string).as_deref(),
        Some("Name is required")
    );
    assert_eq!(
        errors.get(FieldName::Email).map(ToString::to_string).as_deref(),
        Some("Email is required")
    );
    assert_eq!(
        errors.get(FieldName::Age).map(ToString::to_string).as_deref(),
        Some("Age is required")
    );
    assert_eq!(engine.state().len(), 1);
    assert_eq!(log.rejected, vec![3]);
    assert!(log.notifications.is_empty());
}

#[test]
fn malformed_email_is_reported_as_invalid() {
    let errors = validate(&Draft::new("Carol", "carol.example.com", "25")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(FieldName::Email).map(ToString::to_string).as_deref(),
        Some("Invalid email")
    );
}

#[test]
fn editing_replaces_the_record_in_place() {
    let mut engine = SessionEngine::new(SessionState::with_records(vec![
        record("Alice", "a@x.com", "30"),
        record("Bob", "b@x.com", "40"),
    ]));
    let mut log = Log::default();
    engine.dispatch(SessionAction::BeginEdit(1), &mut log).unwrap();
    assert_eq!(engine.state().submit_label(), "Update");
    assert_eq!(engine.state().draft(), &Draft::new("Bob", "b@x.com", "40"));

    engine
        .dispatch(
            SessionAction::EditField {
                field: FieldName::Email,
                value: "bob@x.com".into(),
            },
            &mut log,
        )
        .unwrap();
    engine.dispatch(SessionAction::Submit, &mut log).unwrap();

    let state = engine.state();
    assert_eq!(state.len(), 2);
    assert_eq!(state.records()[1], record("Bob", "bob@x.com", "40"));
    assert_eq!(state.submit_label(), "Add");
    assert_eq!(
        log.notifications,
        vec![
            "You can now edit the selected record.".to_string(),
            "Record updated successfully!".to_string()
        ]
    );
}

#[test]
fn delete_goes_through_the_confirmation_gate() {
    let mut engine = SessionEngine::new(SessionState::with_records(vec![
        record("Alice", "a@x.com", "30"),
        record("Bob", "b@x.com", "40"),
    ]));
    let mut log = Log::default();

    engine.dispatch(SessionAction::RequestDelete(0), &mut log).unwrap();
    assert_eq!(log.prompts, vec![(0, "Alice".to_string())]);
    assert_eq!(engine.state().len(), 2);
    assert_eq!(
        engine.dispatch(SessionAction::Submit, &mut log),
        Err(ActionError::ConfirmationPending)
    );

    engine.dispatch(SessionAction::CancelDelete, &mut log).unwrap();
    assert_eq!(engine.state().len(), 2);

    engine.dispatch(SessionAction::RequestDelete(0), &mut log).unwrap();
    engine.dispatch(SessionAction::ConfirmDelete, &mut log).unwrap();
    assert_eq!(engine.state().records(), &[record("Bob", "b@x.com", "40")]);
    assert_eq!(
        log.notifications.last().map(String::as_str),
        Some("Record deleted successfully!")
    );
}

#[test]
fn out_of_range_index_is_refused_without_a_state_change() {
    let mut engine = SessionEngine::default();
    let mut log = Log::default();
    assert_eq!(
        engine.dispatch(SessionAction::RequestDelete(0), &mut log),
        Err(ActionError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(log.changes, 0);
    assert_eq!(engine.state(), &SessionState::new());
}

#[test]
fn reduce_reports_effects_without_an_observer() {
    let state = SessionState::with_records(vec![record("Alice", "a@x.com", "30")]);
    let reduction = recordform::reduce(&state, SessionAction::RequestDelete(0)).unwrap();
    assert_eq!(
        reduction.effects,
        vec![Effect::ConfirmDelete {
            index: 0,
            record: record("Alice", "a@x.com", "30"),
        }]
    );
    assert_eq!(state.pending_delete(), None);
}

#[test]
fn export_writes_the_records_document_to_a_file() {
    let dir = std::env::temp_dir().join(format!("recordform-export-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("records.json");
    let options = OutputOptions::new(DocumentFormat::Json)
        .with_pretty(false)
        .with_destinations(vec![OutputDestination::file(&path)]);

    emit(&[record("Alice", "a@x.com", "30")], &options).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written.trim_end(),
        r#"{"records":[{"name":"Alice","email":"a@x.com","age":30}]}"#
    );
    std::fs::remove_dir_all(&dir).unwrap();
}
