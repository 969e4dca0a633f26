#![allow(dead_code)]

use std::io::Write;
use std::process::ExitCode;

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// `ExitCode` has no stable equality; compare through its debug form.
pub fn assert_exit_code(actual: ExitCode, expected: u8) {
    assert_eq!(
        format!("{actual:?}"),
        format!("{:?}", ExitCode::from(expected))
    );
}

pub const VALID_INI: &str = r#"
[logging]
enabled = true
level = warn
"#;
