//! Input validation limits for loaded datasets

/// Maximum length for a person's name (256 chars)
pub const MAX_PERSON_NAME_LEN: usize = 256;

/// Maximum people declared in one dataset (100000)
pub const MAX_PEOPLE: usize = 100_000;

/// Maximum family units in one dataset (100000)
pub const MAX_FAMILIES: usize = 100_000;

/// Maximum children listed in a single family unit (1000)
pub const MAX_CHILDREN_PER_FAMILY: usize = 1000;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    PersonNameTooLong { len: usize, max: usize },
    TooManyPeople { count: usize, max: usize },
    TooManyFamilies { count: usize, max: usize },
    TooManyChildren { count: usize, max: usize },
    EmptyPersonName,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonNameTooLong { len, max } => {
                write!(f, "Person name too long: {} chars (max {})", len, max)
            }
            Self::TooManyPeople { count, max } => {
                write!(f, "Too many people: {} (max {})", count, max)
            }
            Self::TooManyFamilies { count, max } => {
                write!(f, "Too many families: {} (max {})", count, max)
            }
            Self::TooManyChildren { count, max } => {
                write!(f, "Too many children in one family: {} (max {})", count, max)
            }
            Self::EmptyPersonName => write!(f, "Person name cannot be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate person name
pub fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyPersonName);
    }
    let len = name.chars().count();
    if len > MAX_PERSON_NAME_LEN {
        return Err(ValidationError::PersonNameTooLong {
            len,
            max: MAX_PERSON_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate number of declared people
pub fn validate_people_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_PEOPLE {
        return Err(ValidationError::TooManyPeople {
            count,
            max: MAX_PEOPLE,
        });
    }
    Ok(())
}

/// Validate number of family units
pub fn validate_family_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_FAMILIES {
        return Err(ValidationError::TooManyFamilies {
            count,
            max: MAX_FAMILIES,
        });
    }
    Ok(())
}

/// Validate number of children in one family unit
pub fn validate_children_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_CHILDREN_PER_FAMILY {
        return Err(ValidationError::TooManyChildren {
            count,
            max: MAX_CHILDREN_PER_FAMILY,
        });
    }
    Ok(())
}
