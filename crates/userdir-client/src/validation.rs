use userdir_types::CreateUserInput;

use crate::ClientError;

/// Same rule as the create form: a name and a positive age are required.
pub fn validate_create_input(input: &CreateUserInput) -> Result<(), ClientError> {
    if input.name.trim().is_empty() {
        return Err(ClientError::Validation("name must not be empty".to_string()));
    }
    if input.age <= 0 {
        return Err(ClientError::Validation(format!(
            "age must be positive, got {}",
            input.age
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, age: i32) -> CreateUserInput {
        CreateUserInput {
            name: name.to_string(),
            age,
            is_married: false,
        }
    }

    #[test]
    fn test_accepts_valid_input() {
        assert!(validate_create_input(&input("Ann", 1)).is_ok());
    }

    #[test]
    fn test_rejects_blank_name_and_non_positive_age() {
        assert!(matches!(
            validate_create_input(&input("  ", 20)),
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            validate_create_input(&input("Ann", 0)),
            Err(ClientError::Validation(_))
        ));
        assert!(matches!(
            validate_create_input(&input("Ann", -4)),
            Err(ClientError::Validation(_))
        ));
    }
}
