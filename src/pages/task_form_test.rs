use super::*;

#[test]
fn validate_task_input_trims_title_and_description() {
    assert_eq!(
        validate_task_input("  Ship it  ", "  by friday ", true),
        Ok(TaskDraft { title: "Ship it".to_owned(), description: Some("by friday".to_owned()), completed: true })
    );
}

#[test]
fn validate_task_input_blank_description_is_none() {
    let draft = validate_task_input("Ship it", "   ", false).unwrap();
    assert_eq!(draft.description, None);
}

#[test]
fn validate_task_input_requires_title() {
    assert_eq!(validate_task_input("   ", "notes", false), Err("Enter a title first."));
}

#[test]
fn form_heading_depends_on_id() {
    assert_eq!(form_heading(None), "New task");
    assert_eq!(form_heading(Some("4")), "Edit task");
}
