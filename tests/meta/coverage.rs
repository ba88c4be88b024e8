//! Checks that the unit test tree mirrors the source tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    // Entry points and module organization files don't need a counterpart
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn relative_rust_paths(root: &Path) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        let scan = collect_relative_paths(root, root, &mut paths);
        assert!(
            scan.is_ok(),
            "Failed to scan {}: {scan:?}",
            root.display()
        );
        paths
    }

    fn collect_relative_paths(
        dir: &Path,
        base: &Path,
        paths: &mut BTreeSet<String>,
    ) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|error| io::Error::other(error.to_string()))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                collect_relative_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    // Tests every source file has a unit test file at the mirrored path
    // Verified by adding a source file without tests
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let sources = relative_rust_paths(Path::new(SOURCE_ROOT));
        let units = relative_rust_paths(Path::new(UNIT_ROOT));

        let missing: Vec<String> = sources
            .iter()
            .filter(|path| !is_organizational(path) && !units.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files/directories missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    // Tests every unit test file still has a source file to cover
    // Verified by leaving a unit test behind after deleting its source
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = relative_rust_paths(Path::new(SOURCE_ROOT));
        let units = relative_rust_paths(Path::new(UNIT_ROOT));

        let orphaned: Vec<String> = units
            .iter()
            .filter(|path| !is_organizational(path) && !sources.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files/directories without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests no test file is left without a test function
    // Verified by emptying a unit test file
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_root = Path::new("tests");
        let mut empty = Vec::new();

        for relative in relative_rust_paths(tests_root) {
            let path = tests_root.join(&relative);
            let file_name = path.file_name().and_then(|name| name.to_str());
            if path.is_dir() || matches!(file_name, Some("main.rs" | "mod.rs")) {
                continue;
            }

            let content = fs::read_to_string(&path).unwrap_or_default();
            if !content.contains("#[test]") {
                empty.push(format!("  - {}", path.display()));
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
