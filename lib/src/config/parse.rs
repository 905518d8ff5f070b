use std::path::PathBuf;
use super::ValueParser;

#[derive(Clone, Debug)]
pub struct StringParser { }

impl ValueParser<String> for self::StringParser {
    fn parse(&self, value: &str) -> Result<String, String> {
        Ok(value.to_owned())
    }
}

pub const STRING: StringParser = StringParser {};

#[derive(Clone, Debug)]
pub struct BoolParser { }

impl ValueParser<bool> for self::BoolParser {
    fn parse(&self, value: &str) -> Result<bool, String> {
        value.trim().to_ascii_lowercase().parse::<bool>()
            .map_err(|_| format!("invalid boolean value: {value}"))
    }
}

pub const BOOL: BoolParser = BoolParser {};

#[derive(Clone, Debug)]
pub struct FilePathParser { }

impl ValueParser<PathBuf> for self::FilePathParser {
    fn parse(&self, value: &str) -> Result<PathBuf, String> {
        Ok(PathBuf::from(shellexpand::tilde(value).into_owned()))
    }
}

pub const FILE_PATH: FilePathParser = FilePathParser {};

#[derive(Clone, Debug)]
pub struct WebPortParser { }

impl ValueParser<u16> for self::WebPortParser {
    fn parse(&self, value: &str) -> Result<u16, String> {
        value.parse::<u16>()
            .map_err(|_| format!("invalid port number: {value}"))
    }
}

pub const WEB_PORT: WebPortParser = WebPortParser {};

/// Comma-separated list.  Items are trimmed and empty items are dropped.
#[derive(Clone, Debug)]
pub struct ListParser { }

impl ValueParser<Vec<String>> for self::ListParser {
    fn parse(&self, value: &str) -> Result<Vec<String>, String> {
        Ok(value.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect())
    }
}

pub const LIST: ListParser = ListParser {};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_is_lenient_about_case() {
        assert_eq!(BOOL.parse("TRUE"), Ok(true));
        assert_eq!(BOOL.parse(" false"), Ok(false));
        assert!(BOOL.parse("yes").is_err());
    }

    #[test]
    fn port_range() {
        assert_eq!(WEB_PORT.parse("26300"), Ok(26300));
        assert!(WEB_PORT.parse("65536").is_err());
    }

    #[test]
    fn list_drops_empty_items() {
        assert_eq!(LIST.parse(" a.css, ,b.css,"),
                   Ok(vec!["a.css".to_owned(), "b.css".to_owned()]));
        assert_eq!(LIST.parse(""), Ok(vec![]));
    }

    #[test]
    fn file_path_keeps_plain_paths() {
        assert_eq!(FILE_PATH.parse("/var/lib/x.sqlite"),
                   Ok(PathBuf::from("/var/lib/x.sqlite")));
    }
}
