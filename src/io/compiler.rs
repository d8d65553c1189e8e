use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// Run `<program> -c icns <iconset> -o <output>` and capture its stderr on failure
pub fn compile_iconset(program: &str, iconset: &Path, output: &Path) -> Result<()> {
    log::debug!(
        "running {} -c icns {} -o {}",
        program,
        iconset.display(),
        output.display()
    );

    let result = Command::new(program)
        .arg("-c")
        .arg("icns")
        .arg(iconset)
        .arg("-o")
        .arg(output)
        .output();

    match result {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output
                .status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            Err(Error::IconCompiler(format!(
                "{} exited with {}: {}",
                program, code, stderr
            )))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(Error::IconCompiler(format!("{} not found", program)))
        }
        Err(e) => Err(Error::IconCompiler(format!("{}: {}", program, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = compile_iconset(
            "rikuest-no-such-iconutil",
            &dir.path().join("X.iconset"),
            &dir.path().join("X.icns"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_reported() {
        // `false` ignores its arguments and exits 1
        let dir = tempfile::tempdir().unwrap();
        let err = compile_iconset("false", dir.path(), &dir.path().join("X.icns")).unwrap_err();
        assert!(err.to_string().contains("exited with 1"));
    }
}
