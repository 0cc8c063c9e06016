pub mod home;
pub mod image;
pub mod upload;

use picvault_core::AppError;

/// Split an object key into `(path, extension)` on the last dot.
///
/// Both halves must be non-empty: `photo` has no extension and `.jpg` has no
/// path, and neither names a storable object.
pub fn split_key(key: &str) -> Result<(&str, &str), AppError> {
    let (path, extension) = key
        .rsplit_once('.')
        .ok_or_else(|| AppError::BadRequest("extension for path must not be empty".to_string()))?;

    if path.is_empty() {
        return Err(AppError::BadRequest("path must not be empty".to_string()));
    }
    if extension.is_empty() {
        return Err(AppError::BadRequest(
            "extension for path must not be empty".to_string(),
        ));
    }

    Ok((path, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_last_dot() {
        assert_eq!(split_key("photo.jpg").unwrap(), ("photo", "jpg"));
        assert_eq!(
            split_key("archive.2024.photo.png").unwrap(),
            ("archive.2024.photo", "png")
        );
    }

    #[test]
    fn rejects_missing_extension() {
        assert!(matches!(split_key("photo"), Err(AppError::BadRequest(_))));
        assert!(matches!(split_key("photo."), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_missing_path() {
        assert!(matches!(split_key(".jpg"), Err(AppError::BadRequest(_))));
    }
}
