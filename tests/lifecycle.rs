//! End-to-end employee lifecycle through `handle_event`, with the record store
//! replaced by synthetic replies.

use staffboard::app::{LoadStatus, Screen};
use staffboard::client::{HttpMethod, RecordStoreClient, Reply, RequestTag, StoreRequest};
use staffboard::ui::{DialogKind, Theme};
use staffboard::{handle_event, Action, AppState, EmployeeId, Event, Field, FieldError};

const COLLECTION: &str = r#"[
    {"id": "e-7", "name": "Ada Lovelace", "email": "ada@example.com", "department": "Engineering", "salary": 150000, "age": 36},
    {"id": "e-9", "name": "Grace Hopper", "email": "grace@example.com", "department": "Research", "salary": 175000.5, "age": 45}
]"#;

fn new_state() -> AppState {
    AppState::new(RecordStoreClient::new("http://store.test").unwrap(), Theme::default())
}

fn send(state: &mut AppState, event: Event) -> Vec<StoreRequest> {
    let (_, actions) = handle_event(state, &event).expect("event should be accepted");
    actions
        .into_iter()
        .filter_map(|action| match action {
            Action::Dispatch(request) => Some(request),
            Action::CloseFocus => None,
        })
        .collect()
}

fn reply(state: &mut AppState, request: &StoreRequest, status: u16, body: &str) -> Vec<StoreRequest> {
    send(
        state,
        Event::StoreReply {
            tag: request.tag.clone(),
            reply: Reply::response(status, body),
        },
    )
}

fn mounted() -> AppState {
    let mut state = new_state();
    let load = send(&mut state, Event::Mount);
    reply(&mut state, &load[0], 200, COLLECTION);
    state
}

fn fill(state: &mut AppState, values: [(Field, &str); 5]) {
    for (field, value) in values {
        send(state, Event::FieldChanged { field, value: value.to_string() });
    }
}

#[test]
fn mount_loads_the_collection() {
    let state = mounted();

    assert_eq!(*state.list.status(), LoadStatus::Idle);
    assert_eq!(state.list.records().len(), 2);
    assert_eq!(state.list.records()[0].id, EmployeeId::new("e-7"));
}

#[test]
fn invalid_submit_sends_nothing_and_shows_every_error() {
    let mut state = mounted();
    send(&mut state, Event::OpenCreateForm);
    fill(
        &mut state,
        [
            (Field::Name, ""),
            (Field::Email, "a@b.com"),
            (Field::Department, "Eng"),
            (Field::Salary, "1000"),
            (Field::Age, "17"),
        ],
    );

    let requests = send(&mut state, Event::Submit);

    assert!(requests.is_empty());
    let draft = state.form.as_ref().unwrap().draft();
    assert_eq!(draft.error(Field::Name), Some(FieldError::Required));
    assert_eq!(draft.error(Field::Age), Some(FieldError::OutOfRange));
    assert_eq!(draft.error(Field::Email), None);
}

#[test]
fn create_posts_and_returns_to_a_refreshed_list() {
    let mut state = mounted();
    send(&mut state, Event::OpenCreateForm);
    fill(
        &mut state,
        [
            (Field::Name, "Katherine Johnson"),
            (Field::Email, "kj@example.com"),
            (Field::Department, "Flight"),
            (Field::Salary, "99000.50"),
            (Field::Age, "52"),
        ],
    );

    let save = send(&mut state, Event::Submit);
    assert_eq!(save.len(), 1);
    assert_eq!(save[0].method, HttpMethod::Post);
    assert_eq!(save[0].url, "http://store.test/api/add-employee");
    let body = save[0].json_body().unwrap();
    assert_eq!(body["salary"], 99000.5);
    assert_eq!(body["age"], 52);
    assert!(body.get("id").is_none());

    assert!(send(&mut state, Event::Submit).is_empty(), "a second submit while saving is ignored");

    reply(&mut state, &save[0], 201, r#"{"employee": {"id": "e-10", "name": "Katherine Johnson", "email": "kj@example.com", "department": "Flight", "salary": 99000.5, "age": 52}}"#);
    let dialog = state.compute_viewmodel(24, 100).dialog.unwrap();
    assert_eq!(dialog.kind, DialogKind::Success);
    assert_eq!(dialog.message, "Employee added successfully!");

    let refresh = send(&mut state, Event::AcknowledgeResult);
    assert_eq!(state.screen, Screen::List);
    assert_eq!(refresh.len(), 1);
    assert_eq!(refresh[0].tag, RequestTag::List);
}

#[test]
fn edit_puts_to_the_original_id() {
    let mut state = mounted();
    send(&mut state, Event::SelectNext);
    send(&mut state, Event::OpenEditForm);
    send(&mut state, Event::FieldChanged { field: Field::Department, value: "Navy".into() });

    let save = send(&mut state, Event::Submit);

    assert_eq!(save[0].method, HttpMethod::Put);
    assert_eq!(save[0].url, "http://store.test/api/update-employee/e-9");
    assert_eq!(save[0].json_body().unwrap()["department"], "Navy");
}

#[test]
fn failed_save_keeps_the_draft_for_another_try() {
    let mut state = mounted();
    send(&mut state, Event::OpenEditForm);
    let save = send(&mut state, Event::Submit);

    reply(&mut state, &save[0], 500, r#"{"message": "database unavailable"}"#);
    let dialog = state.compute_viewmodel(24, 100).dialog.unwrap();
    assert_eq!(dialog.message, "Failed to save employee: database unavailable");

    let after_ack = send(&mut state, Event::AcknowledgeResult);
    assert!(after_ack.is_empty());
    assert_eq!(state.screen, Screen::Form);
    assert_eq!(state.form.as_ref().unwrap().draft().value(Field::Name), "Ada Lovelace");
    assert_eq!(send(&mut state, Event::Submit).len(), 1);
}

#[test]
fn successful_delete_refreshes_once_after_acknowledgment() {
    let mut state = mounted();
    send(&mut state, Event::RequestDelete);
    let delete = send(&mut state, Event::ConfirmDelete);
    assert_eq!(delete[0].method, HttpMethod::Delete);
    assert_eq!(delete[0].url, "http://store.test/api/delete-employee/e-7");

    let on_reply = reply(&mut state, &delete[0], 200, r#"{"message": "deleted"}"#);
    assert!(on_reply.is_empty(), "no refresh before the user acknowledges");
    assert_eq!(state.list.records().len(), 2, "no optimistic removal");
    let dialog = state.compute_viewmodel(24, 100).dialog.unwrap();
    assert_eq!(dialog.message, "Ada Lovelace's data has been deleted successfully!");

    let refresh = send(&mut state, Event::AcknowledgeResult);
    assert_eq!(refresh.len(), 1);
    assert_eq!(refresh[0].tag, RequestTag::List);
    assert!(handle_event(&mut state, &Event::AcknowledgeResult).is_err());
}

#[test]
fn failed_delete_never_refreshes_and_keeps_the_row() {
    let mut state = mounted();
    send(&mut state, Event::RequestDelete);
    let delete = send(&mut state, Event::ConfirmDelete);

    reply(&mut state, &delete[0], 404, "");
    let dialog = state.compute_viewmodel(24, 100).dialog.unwrap();
    assert_eq!(dialog.kind, DialogKind::Failure);
    assert_eq!(dialog.message, "Failed to delete employee: request failed with status 404");

    assert!(send(&mut state, Event::AcknowledgeResult).is_empty());
    assert!(state.compute_viewmodel(24, 100).dialog.is_none());
    assert!(state.list.records().iter().any(|r| r.id == EmployeeId::new("e-7")));
}

#[test]
fn cancel_is_rejected_while_a_delete_is_in_flight() {
    let mut state = mounted();
    send(&mut state, Event::RequestDelete);
    send(&mut state, Event::ConfirmDelete);

    assert!(handle_event(&mut state, &Event::CancelDelete).is_err());
}

#[test]
fn failed_reload_keeps_previous_records() {
    let mut state = mounted();
    let reload = send(&mut state, Event::RetryLoad);

    reply(&mut state, &reload[0], 503, r#"{"error": "maintenance"}"#);

    assert_eq!(*state.list.status(), LoadStatus::Error("maintenance".into()));
    assert_eq!(state.list.records().len(), 2);
}

#[test]
fn transport_fault_is_a_failed_load() {
    let mut state = new_state();
    let load = send(&mut state, Event::Mount);

    send(
        &mut state,
        Event::StoreReply {
            tag: load[0].tag.clone(),
            reply: Reply::transport_fault("connection refused"),
        },
    );

    assert_eq!(*state.list.status(), LoadStatus::Error("connection refused".into()));
}

#[test]
fn stale_replies_are_discarded() {
    let mut state = mounted();

    let stray_delete = Event::StoreReply {
        tag: RequestTag::Delete { id: EmployeeId::new("e-9") },
        reply: Reply::response(200, "{}"),
    };
    let (render, actions) = handle_event(&mut state, &stray_delete).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert!(state.list.open_dialog().is_none());

    let stray_save = Event::StoreReply {
        tag: RequestTag::Save { session: 99 },
        reply: Reply::response(200, "{}"),
    };
    let (render, _) = handle_event(&mut state, &stray_save).unwrap();
    assert!(!render);
}

#[test]
fn same_events_give_same_requests() {
    let run = || {
        let mut state = mounted();
        send(&mut state, Event::OpenEditForm);
        send(&mut state, Event::FieldChanged { field: Field::Age, value: "37".into() });
        let save = send(&mut state, Event::Submit);
        (save[0].method, save[0].url.clone(), save[0].body.clone())
    };

    assert_eq!(run(), run());
}
