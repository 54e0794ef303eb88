use crate::config::BatchConfig;
use crate::detector::{self, EncodingDetector};
use crate::error::{ConvertError, Result};
use crate::scanner::CandidateFile;
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

/// Literal replacements applied to every converted file.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("DFauto (English)", "DFauto__English"),
    ("DFauto (Dutch)", "DFauto__Dutch"),
];

/// Apply the fixed replacements, globally and case-sensitively.
pub fn apply_substitutions(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in SUBSTITUTIONS {
        out = out.replace(from, to);
    }
    out
}

/// Strict decode: any malformed sequence under `encoding` is an error.
fn decode_strict(bytes: &[u8], encoding: &'static Encoding, file_name: &str) -> Result<String> {
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(ConvertError::Decode {
            file: file_name.to_string(),
            encoding: encoding.name().to_string(),
        });
    }
    Ok(text.into_owned())
}

fn write_converted(text: &str, file_name: &str, output_dir: &Path) -> Result<()> {
    let converted = apply_substitutions(text);
    fs::write(output_dir.join(file_name), converted)?;
    Ok(())
}

/// Decode one candidate under `encoding`, substitute, write the UTF-8 copy.
pub fn convert_file(
    file: &CandidateFile,
    encoding: &'static Encoding,
    output_dir: &Path,
) -> Result<()> {
    let bytes = fs::read(&file.path)?;
    let text = decode_strict(&bytes, encoding, &file.file_name)?;
    write_converted(&text, &file.file_name, output_dir)
}

/// Fallback pass: the bytes must be valid UTF-8 as they stand.
fn convert_file_forced_utf8(file: &CandidateFile, output_dir: &Path) -> Result<()> {
    let bytes = fs::read(&file.path)?;
    let text = String::from_utf8(bytes).map_err(|_| ConvertError::FallbackDecode {
        file: file.file_name.clone(),
    })?;
    write_converted(&text, &file.file_name, output_dir)
}

/// Run the whole batch over already-enumerated candidates.
///
/// Per file: undetectable encoding skips the file, a failed decode under the
/// detected encoding gets one forced utf-8 retry, and a failed retry aborts
/// the batch (files after it stay unprocessed). Returns the number of files
/// written.
pub fn run_batch(
    config: &BatchConfig,
    detector_impl: &dyn EncodingDetector,
    candidates: &[CandidateFile],
) -> Result<usize> {
    fs::create_dir_all(&config.output_dir)?;

    let mut converted = 0;

    for file in candidates {
        let encoding = match detector::detect_encoding(detector_impl, &file.path)? {
            Some(encoding) => encoding,
            None => {
                println!("⚠ Could not detect encoding for {}", file.file_name);
                continue;
            }
        };

        match convert_file(file, encoding, &config.output_dir) {
            Ok(()) => converted += 1,
            Err(err) => {
                println!(
                    "⚠ {} [{}] {}, retrying as utf-8",
                    file.file_name,
                    encoding.name(),
                    err
                );
                convert_file_forced_utf8(file, &config.output_dir)?;
                converted += 1;
            }
        }
    }

    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_8, WINDOWS_1252};
    use std::fs;

    #[test]
    fn test_substitutions_both_targets() {
        let input = "report for DFauto (English) and DFauto (Dutch) users";
        assert_eq!(
            apply_substitutions(input),
            "report for DFauto__English and DFauto__Dutch users"
        );
    }

    #[test]
    fn test_substitutions_global() {
        let input = "DFauto (English) DFauto (English) DFauto (English)";
        assert_eq!(
            apply_substitutions(input),
            "DFauto__English DFauto__English DFauto__English"
        );
    }

    #[test]
    fn test_substitutions_case_sensitive() {
        let input = "dfauto (english) DFAUTO (DUTCH)";
        assert_eq!(apply_substitutions(input), input);
    }

    #[test]
    fn test_substitutions_leave_other_text_alone() {
        let input = "DFauto (German) stays, so does DFauto English";
        assert_eq!(apply_substitutions(input), input);
    }

    #[test]
    fn test_convert_file_windows_1252() {
        let temp_dir = std::env::temp_dir().join("dfauto-test-cp1252");
        let out_dir = temp_dir.join("out");
        fs::create_dir_all(&out_dir).unwrap();

        let path = temp_dir.join("legacy.merged.txt");
        fs::write(&path, b"caf\xe9 DFauto (Dutch)").unwrap();

        let file = CandidateFile {
            path: path.clone(),
            file_name: "legacy.merged.txt".to_string(),
        };
        convert_file(&file, WINDOWS_1252, &out_dir).unwrap();

        let written = fs::read_to_string(out_dir.join("legacy.merged.txt")).unwrap();
        assert_eq!(written, "café DFauto__Dutch");

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_convert_file_bad_utf8_is_decode_error() {
        let temp_dir = std::env::temp_dir().join("dfauto-test-badutf8");
        let out_dir = temp_dir.join("out");
        fs::create_dir_all(&out_dir).unwrap();

        let path = temp_dir.join("broken.merged.txt");
        fs::write(&path, b"ok so far \xff\xfe\xfd").unwrap();

        let file = CandidateFile {
            path: path.clone(),
            file_name: "broken.merged.txt".to_string(),
        };
        let result = convert_file(&file, UTF_8, &out_dir);

        assert!(matches!(
            result,
            Err(ConvertError::Decode { .. })
        ));
        assert!(!out_dir.join("broken.merged.txt").exists());

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_convert_file_overwrites_existing_output() {
        let temp_dir = std::env::temp_dir().join("dfauto-test-overwrite");
        let out_dir = temp_dir.join("out");
        fs::create_dir_all(&out_dir).unwrap();

        let path = temp_dir.join("again.merged.txt");
        fs::write(&path, "DFauto (English) export").unwrap();
        fs::write(out_dir.join("again.merged.txt"), "stale").unwrap();

        let file = CandidateFile {
            path: path.clone(),
            file_name: "again.merged.txt".to_string(),
        };
        convert_file(&file, UTF_8, &out_dir).unwrap();

        let written = fs::read_to_string(out_dir.join("again.merged.txt")).unwrap();
        assert_eq!(written, "DFauto__English export");

        fs::remove_dir_all(&temp_dir).ok();
    }
}
