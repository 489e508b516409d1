use crate::utils::error::{LoaderError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LoaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LoaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LoaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks the `name=value` shape used by `--time` and `--sequence`.
pub fn validate_key_value_pair(field_name: &str, entry: &str) -> Result<()> {
    match entry.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() && !value.trim().is_empty() => Ok(()),
        _ => Err(LoaderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: entry.to_string(),
            reason: "Expected the form 'name=value'".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("filepath", "/data/scene.dae").is_ok());
        assert!(validate_path("filepath", "").is_err());
        assert!(validate_path("filepath", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("application-id", "my_app").is_ok());
        assert!(validate_non_empty_string("application-id", "   ").is_err());
    }

    #[test]
    fn test_validate_key_value_pair() {
        assert!(validate_key_value_pair("time", "sim_time=1709203426").is_ok());
        assert!(validate_key_value_pair("sequence", "sim_frame=42").is_ok());
        assert!(validate_key_value_pair("time", "sim_time").is_err());
        assert!(validate_key_value_pair("time", "=42").is_err());
        assert!(validate_key_value_pair("time", "sim_time=").is_err());
    }
}
