use std::path::PathBuf;

use thiserror::Error;

use crate::constants::messages;

/// Everything that can go wrong between a drop and a written icon.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("expected exactly one dropped file, got {count}")]
    MultipleFiles { count: usize },

    #[error("unsupported file type: {}", path.display())]
    UnsupportedType { path: PathBuf },

    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write icon {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: EncodeCause,
    },
}

#[derive(Debug, Error)]
pub enum EncodeCause {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Text shown on the preview surface.
    pub fn user_message(&self) -> String {
        match self {
            Self::MultipleFiles { .. } => messages::MULTIPLE_FILES.to_owned(),
            Self::UnsupportedType { .. } => messages::UNSUPPORTED_TYPE.to_owned(),
            Self::Decode { source, .. } => format!("Error loading image:\n{source}"),
            Self::Encode { source, .. } => format!("Error saving icon:\n{source}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn validation_messages_are_fixed() {
        assert_eq!(
            ConvertError::MultipleFiles { count: 2 }.user_message(),
            "Please drop only one file."
        );
        assert_eq!(
            ConvertError::UnsupportedType {
                path: "doc.txt".into()
            }
            .user_message(),
            "Invalid file type. Please drop an image."
        );
    }

    #[test]
    fn encode_message_carries_cause() {
        let err = ConvertError::Encode {
            path: "out.ico".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied").into(),
        };
        let msg = err.user_message();
        assert!(msg.starts_with("Error saving icon:"));
        assert!(msg.ends_with("denied"));
    }

    #[test]
    fn error_chain_names_cause_once() {
        let err = ConvertError::Encode {
            path: "out.ico".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied").into(),
        };
        assert_eq!(err.to_string(), "failed to write icon out.ico");

        let chained = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chained, "failed to write icon out.ico: denied");
    }
}
