use crate::error::SelectionError;

/// A file the user picked or dropped, before validation. `F` is whatever
/// handle the platform uses for the bytes (a browser `File`, a `Vec<u8>`).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<F> {
    pub file: F,
    pub name: String,
    pub media_type: String,
    pub size: u64,
}

impl<F> Candidate<F> {
    pub fn new(file: F, name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            file,
            name: name.into(),
            media_type: media_type.into(),
            size,
        }
    }
}

/// A validated image: media type starts with `image/` and it fits the upload limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<F> {
    file: F,
    name: String,
    media_type: String,
    size: u64,
}

impl<F> Selection<F> {
    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

pub fn validate<F>(candidate: Candidate<F>, max_bytes: u64) -> Result<Selection<F>, SelectionError> {
    if !candidate.media_type.starts_with("image/") {
        return Err(SelectionError::NotAnImage);
    }
    if candidate.size > max_bytes {
        return Err(SelectionError::TooLarge { size: candidate.size });
    }

    Ok(Selection {
        file: candidate.file,
        name: candidate.name,
        media_type: candidate.media_type,
        size: candidate.size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_UPLOAD_BYTES;

    fn candidate(media_type: &str, size: u64) -> Candidate<()> {
        Candidate::new((), "scan.png", media_type, size)
    }

    #[test]
    fn accepts_images_up_to_the_limit() {
        let selection = validate(candidate("image/png", MAX_UPLOAD_BYTES), MAX_UPLOAD_BYTES)
            .expect("limit is inclusive");
        assert_eq!(selection.media_type(), "image/png");
        assert_eq!(selection.size(), MAX_UPLOAD_BYTES);
        assert_eq!(selection.name(), "scan.png");
    }

    #[test]
    fn rejects_non_images() {
        for media_type in ["application/pdf", "text/plain", "", "IMAGE/png", "video/mp4"] {
            assert_eq!(
                validate(candidate(media_type, 10), MAX_UPLOAD_BYTES),
                Err(SelectionError::NotAnImage),
                "{media_type:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_oversized_files_regardless_of_type() {
        let size = MAX_UPLOAD_BYTES + 1;
        assert_eq!(
            validate(candidate("image/jpeg", size), MAX_UPLOAD_BYTES),
            Err(SelectionError::TooLarge { size })
        );
        assert!(validate(candidate("application/zip", size), MAX_UPLOAD_BYTES).is_err());
    }
}
