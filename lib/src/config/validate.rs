use super::ValueValidator;

#[derive(Clone, Debug)]
pub struct WebPathValidator { }

impl ValueValidator<String> for self::WebPathValidator {
    fn validate(&self, path: &String) -> Result<(), String> {
        if !path.starts_with('/') {
            Err(format!("path must start with / character: {path}"))
        } else {
            Ok(())
        }
    }
}

pub const WEB_PATH: &WebPathValidator = &WebPathValidator {};

/// Only checks the scheme.
#[derive(Clone, Debug)]
pub struct UrlValidator { }

impl ValueValidator<String> for self::UrlValidator {
    fn validate(&self, url: &String) -> Result<(), String> {
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(format!("URL must start with http:// or https://: {url}"))
        }
    }
}

pub const URL: &UrlValidator = &UrlValidator {};
