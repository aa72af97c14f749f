//! Script file loading and interpreter mapping.
//!
//! The collector's debug console selects an interpreter via a `!<name>`
//! prefix on the first line of the command, so a local script file is
//! submitted as `!groovy \n <contents>` (or `!posh` for PowerShell).
//! Which prefix to use is decided purely by the file's extension.

use crate::error::{LmError, Result};
use std::fs;
use std::path::Path;

/// The collector-side interpreter a script runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    /// Groovy, selected by the `.groovy` extension.
    Groovy,
    /// PowerShell, selected by the `.ps1` extension.
    Posh,
}

impl ScriptKind {
    /// Maps a path's extension to an interpreter, case-sensitively.
    ///
    /// # Errors
    ///
    /// [`LmError::UnsupportedScriptType`] for any extension other than
    /// `.groovy` or `.ps1`, including extensionless paths. Raised before
    /// any network call so a typo'd path never reaches the API.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("groovy") => Ok(ScriptKind::Groovy),
            Some("ps1") => Ok(ScriptKind::Posh),
            Some(other) => Err(LmError::UnsupportedScriptType {
                extension: format!(".{other}"),
            }),
            None => Err(LmError::UnsupportedScriptType {
                extension: "(none)".to_string(),
            }),
        }
    }

    /// The debug-console interpreter name for this kind.
    pub fn interpreter(self) -> &'static str {
        match self {
            ScriptKind::Groovy => "groovy",
            ScriptKind::Posh => "posh",
        }
    }
}

/// Reads a script file and determines its interpreter.
///
/// The file is decoded lossily as UTF-8 (binary content passes through as
/// replacement characters rather than failing), a leading byte-order mark
/// is dropped, and surrounding whitespace is trimmed. Empty scripts are
/// permitted and submitted as empty strings.
pub fn load_script(path: &Path) -> Result<(ScriptKind, String)> {
    let kind = ScriptKind::from_path(path)?;
    let bytes = fs::read(path).map_err(|source| LmError::ScriptRead {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    let body = text.trim_start_matches('\u{feff}').trim().to_string();
    Ok((kind, body))
}

/// Builds the debug-console command line: `!<interpreter> \n <script>`.
///
/// The exact spacing (one space before the newline, one after) is part of
/// the collector's parsing convention and must not change.
pub fn build_cmdline(kind: ScriptKind, script: &str) -> String {
    format!("!{} \n {}", kind.interpreter(), script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn groovy_extension_maps_to_groovy() {
        let kind = ScriptKind::from_path(Path::new("check.groovy")).unwrap();
        assert_eq!(kind, ScriptKind::Groovy);
        assert_eq!(kind.interpreter(), "groovy");
    }

    #[test]
    fn ps1_extension_maps_to_posh() {
        let kind = ScriptKind::from_path(Path::new("fix.ps1")).unwrap();
        assert_eq!(kind, ScriptKind::Posh);
        assert_eq!(kind.interpreter(), "posh");
    }

    #[test]
    fn other_extension_is_rejected_with_the_extension_named() {
        match ScriptKind::from_path(Path::new("script.sh")) {
            Err(LmError::UnsupportedScriptType { extension }) => {
                assert_eq!(extension, ".sh");
            }
            other => panic!("expected UnsupportedScriptType, got {other:?}"),
        }
    }

    #[test]
    fn extensionless_path_is_rejected() {
        assert!(matches!(
            ScriptKind::from_path(Path::new("script")),
            Err(LmError::UnsupportedScriptType { .. })
        ));
    }

    #[test]
    fn extension_matching_is_case_sensitive() {
        // `.GROOVY` is not `.groovy`; the mapping follows the original
        // tool's exact-match behavior.
        assert!(matches!(
            ScriptKind::from_path(Path::new("check.GROOVY")),
            Err(LmError::UnsupportedScriptType { .. })
        ));
    }

    #[test]
    fn cmdline_formatting_is_exact() {
        assert_eq!(build_cmdline(ScriptKind::Groovy, "echo 1"), "!groovy \n echo 1");
        assert_eq!(build_cmdline(ScriptKind::Posh, "whoami"), "!posh \n whoami");
    }

    #[test]
    fn bom_is_stripped_and_content_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let with_bom = dir.path().join("a.groovy");
        let without_bom = dir.path().join("b.groovy");
        {
            let mut f = std::fs::File::create(&with_bom).unwrap();
            f.write_all(b"\xEF\xBB\xBFprintln \"hi\"\n").unwrap();
        }
        std::fs::write(&without_bom, "println \"hi\"\n").unwrap();

        let (_, a) = load_script(&with_bom).unwrap();
        let (_, b) = load_script(&without_bom).unwrap();
        assert_eq!(a, b, "BOM-prefixed file should load identically");
        assert_eq!(a, "println \"hi\"", "trailing newline should be trimmed");
    }

    #[test]
    fn empty_script_loads_as_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.ps1");
        std::fs::write(&path, "").unwrap();
        let (kind, body) = load_script(&path).unwrap();
        assert_eq!(kind, ScriptKind::Posh);
        assert_eq!(body, "");
    }

    #[test]
    fn whitespace_only_script_trims_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.groovy");
        std::fs::write(&path, "  \n\t \n").unwrap();
        let (_, body) = load_script(&path).unwrap();
        assert_eq!(body, "");
    }

    #[test]
    fn missing_file_is_script_read_error() {
        match load_script(Path::new("/nonexistent/dir/x.groovy")) {
            Err(LmError::ScriptRead { path, .. }) => {
                assert!(path.ends_with("x.groovy"));
            }
            other => panic!("expected ScriptRead, got {other:?}"),
        }
    }
}
