//! Student registration form.

use crate::error::SchemaError;
use crate::form::{Form, FormConfig};
use crate::schema::Schema;
use crate::sink::LogSink;

const PHONE_PLACEHOLDER: &str = "(000) 000-0000";

/// Schema for the student registration form.
pub fn student_schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field("firstName")
        .label("First Name")
        .required("First Name is required")
        .field("middleName")
        .label("Middle Name")
        .field("lastName")
        .label("Last Name")
        .required("Last Name is required")
        .field("month")
        .label("Month")
        .required("Month is required")
        .field("day")
        .label("Day")
        .required("Day is required")
        .field("year")
        .label("Year")
        .required("Year is required")
        .field("gender")
        .label("Gender")
        .placeholder("Please Select")
        .required("Gender is required")
        .one_of(["Male", "Female", "Other"], "Please select a valid gender")
        .field("address")
        .label("Street Address")
        .required("Address is required")
        .field("address2")
        .label("Street Address Line 2")
        .field("city")
        .label("City")
        .required("City is required")
        .field("state")
        .label("State / Province")
        .required("State is required")
        .field("zip")
        .label("Postal / Zip Code")
        .required("Postal / Zip Code is required")
        .field("email")
        .label("Student E-mail")
        .placeholder("example@example.com")
        .email("Invalid email")
        .required("Email is required")
        .field("mobileNumber")
        .label("Mobile Number")
        .placeholder(PHONE_PLACEHOLDER)
        .required("Mobile Number is required")
        .field("phoneNumber")
        .label("Phone Number")
        .placeholder(PHONE_PLACEHOLDER)
        .required("Phone Number is required")
        .field("workNumber")
        .label("Work Number")
        .placeholder(PHONE_PLACEHOLDER)
        .field("company")
        .label("Company")
        .field("courses")
        .label("Courses")
        .placeholder("Please Select")
        .required("Course is required")
        .one_of(["Course 1", "Course 2", "Course 3"], "Please select a valid course")
        .field("comments")
        .label("Additional Comments")
        .build()
}

/// Mount the student registration form with submissions going to the log.
pub fn mount_student(config: FormConfig) -> Result<Form<LogSink>, SchemaError> {
    Ok(Form::mount(student_schema()?, LogSink::new(), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SubmissionSink;
    use crate::store::Snapshot;
    use crate::validation::validate;

    fn complete() -> Snapshot {
        Snapshot::new()
            .with("firstName", "Ana")
            .with("lastName", "Silva")
            .with("month", "04")
            .with("day", "12")
            .with("year", "2001")
            .with("gender", "Female")
            .with("address", "1 Main St")
            .with("city", "Springfield")
            .with("state", "IL")
            .with("zip", "62701")
            .with("email", "ana@example.com")
            .with("mobileNumber", "(555) 555-0101")
            .with("phoneNumber", "(555) 555-0102")
            .with("courses", "Course 2")
    }

    #[test]
    fn test_complete_registration_is_valid() {
        let schema = student_schema().unwrap();
        assert!(validate(&schema, &complete()).is_valid());
    }

    #[test]
    fn test_empty_registration_reports_required_fields() {
        let schema = student_schema().unwrap();
        let errors = validate(&schema, &Snapshot::new());

        assert_eq!(errors.len(), 14);
        assert_eq!(errors.get("firstName"), Some("First Name is required"));
        assert_eq!(errors.get("zip"), Some("Postal / Zip Code is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("courses"), Some("Course is required"));
        assert!(!errors.contains("middleName"));
        assert!(!errors.contains("comments"));
    }

    #[test]
    fn test_invalid_email_and_selection() {
        let schema = student_schema().unwrap();
        let snapshot = complete().with("email", "ana").with("gender", "Unknown");
        let errors = validate(&schema, &snapshot);

        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert_eq!(errors.get("gender"), Some("Please select a valid gender"));
    }

    #[test]
    fn test_whitespace_email_is_invalid() {
        let schema = student_schema().unwrap();
        let errors = validate(&schema, &complete().with("email", "   "));
        assert_eq!(errors.get("email"), Some("Invalid email"));
    }

    #[test]
    fn test_mount_student_logs_without_hydrating() {
        let mut form = mount_student(FormConfig::default()).unwrap();
        for (field, value) in complete().iter() {
            form.input(field, value);
        }
        assert!(form.submit().unwrap().is_accepted());
        assert_eq!(form.sink().load().unwrap(), None);
    }
}
