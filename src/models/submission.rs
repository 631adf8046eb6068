use serde::Deserialize;
use url::Url;
use validator::Validate;

/// DTO for the contact form.
///
/// Submission DTOs share the empty-string default: a field missing from the
/// JSON body fails the same length validator as a blank one.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "First name must not be empty"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Last name must not be empty"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Phone number must not be empty"))]
    pub phone_number: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 5000, message = "Message must not be empty"))]
    pub message: String,
}

/// DTO for the order form.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Company name must not be empty"))]
    pub company_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Activity area must not be empty"))]
    pub activity_area: String,

    #[serde(default)]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Contact number must not be empty"))]
    pub contact_number: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 5000, message = "Explanation must not be empty"))]
    pub explanation: String,
}

/// DTO for the job application form.
///
/// The resume is referenced by URL; hosting the file itself is outside this
/// service.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateApplicationRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "First name must not be empty"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Last name must not be empty"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Phone number must not be empty"))]
    pub phone_number: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Education degree must not be empty"))]
    pub education_degree: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Study field must not be empty"))]
    pub study_field: String,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 500, message = "Resume URL must not be empty"),
        custom(function = validate_url_string)
    )]
    pub resume_url: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 10000, message = "Cover letter must not be empty"))]
    pub cover_letter: String,
}

/// Validates that a string is a correctly formatted URL.
fn validate_url_string(url: &str) -> Result<(), validator::ValidationError> {
    if Url::parse(url).is_err() {
        return Err(validator::ValidationError::new("invalid_url"));
    }
    Ok(())
}
