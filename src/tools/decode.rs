//! Decoder: image → JSON envelope of decoded payloads.
//!
//! Once the job's `input` is known, every outcome is written to the output
//! file: the success envelope, or `{"success": false, "error": ...}`. The
//! error is still returned so the process exits non-zero.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::QrsmithError;
use crate::job::JobRequest;
use crate::scan::{self, DecodeEnvelope};

/// Message for a decode job without `input`.
pub const MISSING_IMAGE: &str = "No image path provided";

/// Run the decoder. Returns the number of symbols found.
pub fn run(job: &JobRequest, output: &Path) -> Result<usize, QrsmithError> {
    let input = job.payload(MISSING_IMAGE)?;

    match scan::decode_input(input) {
        Ok(results) => {
            let count = results.len();
            debug!(count, "decoded symbols");
            write_envelope(output, &DecodeEnvelope::success(results))?;
            Ok(count)
        }
        Err(e) => {
            write_envelope(output, &DecodeEnvelope::failure(&e))?;
            Err(e)
        }
    }
}

fn write_envelope(path: &Path, envelope: &DecodeEnvelope) -> Result<(), QrsmithError> {
    fs::write(path, envelope.to_json()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("qrsmith-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let out = scratch_file("decode-missing-input");
        let _ = fs::remove_file(&out);

        let job = JobRequest::from_json(r#"{"options": {}}"#).unwrap();
        let err = run(&job, &out).unwrap_err();
        assert_eq!(err.to_string(), MISSING_IMAGE);
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_file_writes_error_envelope() {
        let out = scratch_file("decode-missing-file");
        let job = JobRequest::from_json(r#"{"input": "/no/such/image.png"}"#).unwrap();
        assert!(run(&job, &out).is_err());

        let envelope: DecodeEnvelope =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert!(!envelope.success);
        assert_eq!(
            envelope.error.as_deref(),
            Some("Image file not found: /no/such/image.png")
        );
        assert!(envelope.results.is_none());
        let _ = fs::remove_file(&out);
    }
}
