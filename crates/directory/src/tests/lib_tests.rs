use super::*;

use shared::{
    domain::{Department, EmployeeField},
    notification::Severity,
};

fn valid_fields(last_name: &str, department: &str) -> FormFields {
    FormFields {
        last_name: last_name.to_string(),
        first_name: "Claire".to_string(),
        email: format!("claire.{}@entreprise.com", last_name.to_lowercase()),
        job_title: "Data Analyst".to_string(),
        department: department.to_string(),
        salary: "47000".to_string(),
        hire_date: "2024-09-02".to_string(),
    }
}

fn add(controller: &mut DirectoryController, fields: FormFields) -> SubmitOutcome {
    controller.open_add_form();
    controller.set_form_fields(fields);
    controller.submit().expect("submit")
}

#[test]
fn adding_appends_with_next_id() {
    let mut controller = DirectoryController::with_default_seed();

    let outcome = add(&mut controller, valid_fields("Leroy", "IT"));

    assert_eq!(outcome, SubmitOutcome::Added(EmployeeId(4)));
    assert_eq!(controller.len(), 4);
    assert_eq!(controller.employees()[3].last_name, "Leroy");
    assert!(!controller.form().is_open());
    assert_eq!(controller.form().fields, FormFields::default());
}

#[test]
fn first_add_into_empty_directory_gets_id_one() {
    let mut controller = DirectoryController::new(Vec::new());
    assert!(controller.is_empty());

    let outcome = add(&mut controller, valid_fields("Leroy", "IT"));
    assert_eq!(outcome, SubmitOutcome::Added(EmployeeId(1)));
}

#[test]
fn empty_field_blocks_submission_and_keeps_form_open() {
    let mut controller = DirectoryController::with_default_seed();
    controller.open_add_form();
    let mut fields = valid_fields("Leroy", "IT");
    fields.job_title.clear();
    controller.set_form_fields(fields.clone());

    let err = controller.submit().expect_err("should fail");

    assert_eq!(
        err,
        ValidationError::MissingFields(vec![EmployeeField::JobTitle])
    );
    assert_eq!(controller.len(), 3);
    assert!(controller.form().is_open());
    assert_eq!(controller.form().fields, fields);

    let notifications = controller.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Error);
    assert_eq!(notifications[0].message, "Please fill in all fields");
}

#[test]
fn editing_preserves_id_and_overwrites_fields() {
    let mut controller = DirectoryController::with_default_seed();
    assert!(controller.open_edit_form(EmployeeId(2)));
    assert_eq!(controller.form().editing(), Some(EmployeeId(2)));
    assert_eq!(controller.form().fields.first_name, "Marie");
    assert_eq!(controller.form().fields.salary, "42000");

    {
        let fields = controller.form_fields_mut();
        fields.job_title = "Lead Designer".to_string();
        fields.salary = "51000".to_string();
        fields.department = "Marketing".to_string();
    }
    let outcome = controller.submit().expect("submit");

    assert_eq!(outcome, SubmitOutcome::Updated(EmployeeId(2)));
    assert_eq!(controller.len(), 3);
    let updated = controller.get(EmployeeId(2)).expect("employee 2");
    assert_eq!(updated.job_title, "Lead Designer");
    assert_eq!(updated.salary, 51000.0);
    assert_eq!(updated.department, Department::Marketing);
    assert_eq!(controller.employees()[1].id, EmployeeId(2));
    assert!(controller.form().editing().is_none());
}

#[test]
fn open_edit_for_unknown_id_is_ignored() {
    let mut controller = DirectoryController::with_default_seed();
    assert!(!controller.open_edit_form(EmployeeId(99)));
    assert!(!controller.form().is_open());
}

#[test]
fn open_add_form_clears_previous_edit() {
    let mut controller = DirectoryController::with_default_seed();
    controller.open_edit_form(EmployeeId(1));
    controller.cancel_form();
    assert_eq!(controller.form().editing(), Some(EmployeeId(1)));

    controller.open_add_form();
    assert!(controller.form().is_open());
    assert!(controller.form().editing().is_none());
    assert_eq!(controller.form().fields, FormFields::default());
}

#[test]
fn cancel_closes_without_mutation() {
    let mut controller = DirectoryController::with_default_seed();
    controller.open_add_form();
    controller.set_form_fields(valid_fields("Leroy", "IT"));
    controller.cancel_form();

    assert!(!controller.form().is_open());
    assert_eq!(controller.len(), 3);
    assert!(controller.take_notifications().is_empty());
}

#[test]
fn delete_removes_exactly_one_record() {
    let mut controller = DirectoryController::with_default_seed();
    let removed = controller.delete(EmployeeId(2)).expect("removed");
    assert_eq!(removed.last_name, "Martin");

    let ids: Vec<i64> = controller.employees().iter().map(|e| e.id.0).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn deleting_unknown_id_is_a_noop_with_notification() {
    let mut controller = DirectoryController::with_default_seed();
    assert!(controller.delete(EmployeeId(42)).is_none());
    assert_eq!(controller.len(), 3);

    let notifications = controller.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Success);
}

#[test]
fn submitting_edit_of_deleted_record_reports_vanished() {
    let mut controller = DirectoryController::with_default_seed();
    controller.open_edit_form(EmployeeId(3));
    controller.delete(EmployeeId(3));
    controller.take_notifications();

    let outcome = controller.submit().expect("submit");

    assert_eq!(outcome, SubmitOutcome::Vanished(EmployeeId(3)));
    assert_eq!(controller.len(), 2);
    assert!(!controller.form().is_open());
    assert!(controller.take_notifications()[0].is_error());
}

#[test]
fn list_with_empty_term_and_all_returns_collection_in_order() {
    let controller = DirectoryController::with_default_seed();
    let names: Vec<&str> = controller
        .list("", DepartmentFilter::All)
        .into_iter()
        .map(|employee| employee.last_name.as_str())
        .collect();
    assert_eq!(names, vec!["Dupont", "Martin", "Bernard"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let controller = DirectoryController::with_default_seed();

    let found = controller.list("marie", DepartmentFilter::All);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].last_name, "Martin");
    assert_eq!(found[0].first_name, "Marie");

    let by_title = controller.list("PROJECT", DepartmentFilter::All);
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, EmployeeId(3));

    assert_eq!(controller.list("entreprise.com", DepartmentFilter::All).len(), 3);
    assert!(controller.list("zzz", DepartmentFilter::All).is_empty());
}

#[test]
fn department_filter_combines_with_search() {
    let controller = DirectoryController::with_default_seed();

    let design = controller.list("", DepartmentFilter::Only(Department::Design));
    assert_eq!(design.len(), 1);
    assert!(design.iter().all(|e| e.department == Department::Design));

    assert!(controller
        .list("jean", DepartmentFilter::Only(Department::Design))
        .is_empty());
    assert!(controller
        .list("", DepartmentFilter::Only(Department::Sales))
        .is_empty());
}

#[test]
fn visible_follows_controller_filter_state() {
    let mut controller = DirectoryController::with_default_seed();
    controller.set_search_term("PIERRE");
    assert_eq!(controller.search_term(), "PIERRE");
    assert_eq!(controller.visible().len(), 1);

    controller.set_search_term("");
    controller.set_selected_department(DepartmentFilter::Only(Department::It));
    let visible = controller.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].last_name, "Dupont");
    assert_eq!(controller.len(), 3);
}

#[test]
fn id_assignment_uses_current_max_not_a_counter() {
    let mut controller = DirectoryController::with_default_seed();
    controller.delete(EmployeeId(2));
    assert_eq!(
        add(&mut controller, valid_fields("Leroy", "IT")),
        SubmitOutcome::Added(EmployeeId(4))
    );

    controller.delete(EmployeeId(4));
    assert_eq!(controller.next_id(), EmployeeId(4));
    controller.delete(EmployeeId(3));
    assert_eq!(
        add(&mut controller, valid_fields("Roux", "HR")),
        SubmitOutcome::Added(EmployeeId(2))
    );
}

#[test]
fn notifications_drain_in_emission_order() {
    let mut controller = DirectoryController::with_default_seed();
    add(&mut controller, valid_fields("Leroy", "IT"));
    controller.delete(EmployeeId(1));

    let messages: Vec<String> = controller
        .take_notifications()
        .into_iter()
        .map(|notification| notification.message)
        .collect();
    assert_eq!(
        messages,
        vec![
            "Employee added successfully".to_string(),
            "Employee deleted successfully".to_string(),
        ]
    );
    assert!(controller.take_notifications().is_empty());
}
