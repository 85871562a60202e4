use std::{fs, path::Path};

use xshell::{cmd, Shell};

#[test]
fn versions_match() {
    let sh = Shell::new().unwrap();
    let pkgid = cmd!(sh, "cargo pkgid -p flagparser").read().unwrap();
    let version = pkgid.rsplit_once(['#', '@']).unwrap().1;

    let changelog = sh.read_file(project_root().join("CHANGELOG.md")).unwrap();
    assert!(
        changelog.contains(&format!("## {version}")),
        "CHANGELOG.md has no entry for {version}"
    );
}

#[test]
fn source_is_tidy() {
    let mut files = Vec::new();
    for dir in ["src", "tests", "demos"] {
        collect_rs(&project_root().join(dir), &mut files);
    }
    assert!(!files.is_empty());

    for path in files {
        let text = fs::read_to_string(&path).unwrap();
        for (i, line) in text.lines().enumerate() {
            let at = format!("{}:{}", path.display(), i + 1);
            assert!(!line.ends_with([' ', '\t']), "trailing whitespace at {at}");
            assert!(!line.contains("dbg!("), "dbg! left at {at}");
        }
        assert!(text.ends_with('\n'), "{} lacks a trailing newline", path.display());
    }
}

fn collect_rs(dir: &Path, acc: &mut Vec<std::path::PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_rs(&path, acc);
        } else if path.extension().is_some_and(|it| it == "rs") {
            acc.push(path);
        }
    }
}

fn project_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap()
}
