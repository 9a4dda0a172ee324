//! Parsing of `key=value` call parameters.

use gigya::{ParamValue, Params};

/// Parses one parameter argument.
///
/// `key=value` sets a value (which may itself contain `=`), `key=` sets an
/// empty string and a bare `key` sets nil.
pub fn parse_param(arg: &str) -> Result<(String, ParamValue), String> {
    let (key, value) = match arg.split_once('=') {
        Some((key, value)) => (key, ParamValue::from(value)),
        None => (arg, ParamValue::Null),
    };
    if key.is_empty() {
        return Err(format!("parameter `{arg}` has no name"));
    }
    Ok((key.to_string(), value))
}

/// Collects parameter arguments into [`Params`].
pub fn collect_params(args: &[String]) -> Result<Params, String> {
    args.iter().map(|arg| parse_param(arg)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value() {
        assert_eq!(
            parse_param("fields=email").unwrap(),
            ("fields".to_string(), ParamValue::from("email"))
        );
    }

    #[test]
    fn test_value_may_contain_equals() {
        let (_, value) = parse_param("filter=a=b").unwrap();
        assert_eq!(value.as_str(), Some("a=b"));
    }

    #[test]
    fn test_bare_key_is_null() {
        assert_eq!(
            parse_param("UID").unwrap(),
            ("UID".to_string(), ParamValue::Null)
        );
    }

    #[test]
    fn test_missing_name_is_rejected() {
        assert!(parse_param("=value").is_err());
        assert!(parse_param("").is_err());
    }

    #[test]
    fn test_collect_params() {
        let args = vec!["uid=_guid_1".to_string(), "fields=email".to_string()];
        let params = collect_params(&args).unwrap();
        assert_eq!(params.to_query(), "UID=_guid_1&fields=email");
    }
}
