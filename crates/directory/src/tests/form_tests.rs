use super::*;

fn complete_fields() -> FormFields {
    FormFields {
        last_name: "Durand".to_string(),
        first_name: "Sophie".to_string(),
        email: "sophie.durand@entreprise.com".to_string(),
        job_title: "Accountant".to_string(),
        department: "Sales".to_string(),
        salary: "38000".to_string(),
        hire_date: "2024-02-01".to_string(),
    }
}

#[test]
fn validates_complete_form_into_typed_draft() {
    let draft = complete_fields().validate().expect("valid form");
    assert_eq!(draft.department, Department::Sales);
    assert_eq!(draft.salary, 38000.0);
    assert_eq!(
        draft.hire_date,
        NaiveDate::from_ymd_opt(2024, 2, 1).expect("date")
    );
}

#[test]
fn reports_every_missing_field_in_form_order() {
    let mut fields = complete_fields();
    fields.hire_date.clear();
    fields.first_name = "   ".to_string();
    fields.salary.clear();

    let err = fields.validate().expect_err("should fail");
    assert_eq!(
        err,
        ValidationError::MissingFields(vec![
            EmployeeField::FirstName,
            EmployeeField::Salary,
            EmployeeField::HireDate,
        ])
    );
    assert_eq!(err.to_string(), "Please fill in all fields");
}

#[test]
fn missing_fields_win_over_parse_errors() {
    let mut fields = complete_fields();
    fields.salary = "lots".to_string();
    fields.email.clear();

    let err = fields.validate().expect_err("should fail");
    assert_eq!(err, ValidationError::MissingFields(vec![EmployeeField::Email]));
}

#[test]
fn rejects_non_numeric_salary() {
    let mut fields = complete_fields();
    fields.salary = "forty thousand".to_string();
    assert_eq!(
        fields.validate().expect_err("should fail"),
        ValidationError::InvalidSalary("forty thousand".to_string())
    );

    fields.salary = "NaN".to_string();
    assert!(matches!(
        fields.validate(),
        Err(ValidationError::InvalidSalary(_))
    ));
}

#[test]
fn accepts_negative_and_fractional_salary() {
    let mut fields = complete_fields();
    fields.salary = "-1200.5".to_string();
    let draft = fields.validate().expect("valid form");
    assert_eq!(draft.salary, -1200.5);
}

#[test]
fn rejects_unknown_department_and_bad_dates() {
    let mut fields = complete_fields();
    fields.department = "Legal".to_string();
    assert_eq!(
        fields.validate().expect_err("should fail"),
        ValidationError::UnknownDepartment("Legal".to_string())
    );

    let mut fields = complete_fields();
    fields.hire_date = "01/02/2024".to_string();
    assert_eq!(
        fields.validate().expect_err("should fail"),
        ValidationError::InvalidHireDate("01/02/2024".to_string())
    );
}

#[test]
fn mirrors_employee_into_text_fields() {
    let employee = complete_fields()
        .validate()
        .expect("valid form")
        .into_employee(EmployeeId(7));
    let fields = FormFields::from_employee(&employee);

    assert_eq!(fields, complete_fields());
    assert_eq!(fields.get(EmployeeField::Salary), "38000");
}

#[test]
fn form_labels_follow_mode() {
    let mut state = FormState::default();
    assert_eq!(state.title(), "Add employee");
    assert_eq!(state.submit_label(), "Add");

    state.editing = Some(EmployeeId(1));
    assert_eq!(state.title(), "Edit employee");
    assert_eq!(state.submit_label(), "Save");

    state.reset();
    assert!(!state.is_editing());
    assert_eq!(state.fields, FormFields::default());
}
