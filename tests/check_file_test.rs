/*!
File-level checks: reading, BOM handling and the scenario table.
*/

use bracket_check::{check_file, CheckError, Outcome};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn check_text(content: &str) -> String {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    check_file(temp_file.path()).unwrap().to_string()
}

#[test]
fn test_scenarios() {
    let cases = [
        ("()[]{}", "All balanced"),
        (")", "Extra closing ) at 1"),
        ("(]", "Mismatched ( vs ] at 1"),
        ("(a\n(b", "Unclosed ( opened at line 1"),
        ("{[()]}", "All balanced"),
        ("", "All balanced"),
    ];
    for (input, expected) in cases {
        assert_eq!(check_text(input), expected, "input {:?}", input);
    }
}

#[test]
fn test_realistic_source() {
    let source = r#"class TasksPage extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    return Column(
      children: [
        Text('Tasks'),
        Expanded(child: ListView(children: items)),
      ],
    );
  }
}
"#;
    assert_eq!(check_text(source), "All balanced");

    let broken = source.replace("items)),", "items),");
    assert_eq!(check_text(&broken), "Mismatched ( vs ] at 8");
}

#[test]
fn test_bom_is_stripped_before_scan() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    let mut content = vec![0xEF, 0xBB, 0xBF];
    content.extend_from_slice(b"  ]");
    temp_file.write_all(&content)?;

    match check_file(temp_file.path()).unwrap() {
        Outcome::ExtraClosing { found, at } => {
            assert_eq!(found, ']');
            assert_eq!(at.column, 3);
            assert_eq!(at.offset, 2);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_missing_file_is_input_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.dart");

    let err = check_file(&path).unwrap_err();
    match err {
        CheckError::InputUnavailable { path: reported, source } => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_directory_is_input_unavailable() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        check_file(dir.path()),
        Err(CheckError::InputUnavailable { .. })
    ));
}
