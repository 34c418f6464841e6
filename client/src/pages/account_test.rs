use super::*;

fn user(name: &str, email: &str, role: Option<&str>) -> UserRecord {
    UserRecord {
        name: name.to_owned(),
        email: email.to_owned(),
        role: role.map(str::to_owned),
        ..UserRecord::default()
    }
}

#[test]
fn details_include_role_when_present() {
    let rows = account_details(&user("Ada", "ada@example.com", Some("instructor")));
    assert_eq!(
        rows,
        vec![
            ("Name", "Ada".to_owned()),
            ("Email", "ada@example.com".to_owned()),
            ("Role", "instructor".to_owned()),
        ]
    );
}

#[test]
fn missing_role_is_left_out() {
    let rows = account_details(&user("Ada", "ada@example.com", None));
    assert!(rows.iter().all(|(label, _)| *label != "Role"));
    assert_eq!(rows.len(), 2);
}

#[test]
fn blank_role_is_left_out() {
    let rows = account_details(&user("Ada", "ada@example.com", Some("  ")));
    assert!(rows.iter().all(|(label, _)| *label != "Role"));
}

#[test]
fn name_falls_back_to_email() {
    let rows = account_details(&user("", "ada@example.com", None));
    assert_eq!(rows[0], ("Name", "ada@example.com".to_owned()));
}
