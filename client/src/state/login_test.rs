use super::*;

#[test]
fn new_model_has_no_visible_error() {
    let model = LoginModel::default();
    assert!(!model.error_visible());
    assert!(!model.busy);
}

#[test]
fn show_then_hide_clears_message() {
    let mut model = LoginModel::default();
    model.show_error("Invalid username or password.");
    assert!(model.error_visible());
    model.hide_messages();
    assert_eq!(model.error_info, "");
}

#[test]
fn begin_submit_clears_previous_error() {
    let mut model = LoginModel::default();
    model.show_error("old");
    assert!(model.begin_submit());
    assert!(model.busy);
    assert!(!model.error_visible());
}

#[test]
fn begin_submit_rejects_reentry_while_busy() {
    let mut model = LoginModel::default();
    assert!(model.begin_submit());
    assert!(!model.begin_submit());
}

#[test]
fn finish_submit_with_error_shows_message() {
    let mut model = LoginModel::default();
    model.begin_submit();
    model.finish_submit(Some("Request failed with status 500.".to_owned()));
    assert!(!model.busy);
    assert_eq!(model.error_info, "Request failed with status 500.");
}

#[test]
fn finish_submit_without_error_stays_clear() {
    let mut model = LoginModel::default();
    model.begin_submit();
    model.finish_submit(None);
    assert!(!model.busy);
    assert!(!model.error_visible());
}
