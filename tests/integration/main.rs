//! Integration tests for Pouch

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn pouch(root: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("pouch");
        cmd.arg("--root").arg(root.path());
        cmd
    }

    /// Save a payload and return the printed id
    fn save(root: &TempDir, label: &str, data: &str) -> String {
        let output = pouch(root)
            .args(["save", "-l", label])
            .write_stdin(data)
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    #[test]
    fn help_displays() {
        cargo_bin_cmd!("pouch")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("local cache for piped command output"));
    }

    #[test]
    fn version_displays() {
        cargo_bin_cmd!("pouch")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("pouch"));
    }

    #[test]
    fn save_then_get_roundtrip() {
        let root = TempDir::new().unwrap();
        let id = save(&root, "scan results", "abc");

        pouch(&root)
            .args(["get", &id])
            .assert()
            .success()
            .stdout("abc");
    }

    #[test]
    fn save_prints_a_uuid() {
        let root = TempDir::new().unwrap();
        let id = save(&root, "anything", "payload");

        assert!(uuid::Uuid::parse_str(&id).is_ok(), "not a uuid: {id}");
    }

    #[test]
    fn get_invalid_id_fails_cleanly() {
        let root = TempDir::new().unwrap();

        pouch(&root)
            .args(["get", "not-a-uuid"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid cache id"));
    }

    #[test]
    fn get_unknown_id_is_a_miss() {
        let root = TempDir::new().unwrap();

        pouch(&root)
            .args(["get", "67e55044-10b1-426f-9247-bb680e5fe0c8"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No cached entry"));
    }

    #[test]
    fn get_traversal_id_is_rejected_without_fs_access() {
        let root = TempDir::new().unwrap();

        pouch(&root)
            .args(["get", "../../etc/passwd"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid cache id"));
    }

    #[test]
    fn get_writes_output_file() {
        let root = TempDir::new().unwrap();
        let id = save(&root, "to file", "file bytes");
        let out = root.path().join("out.txt");

        pouch(&root)
            .args(["get", &id, "-o"])
            .arg(&out)
            .assert()
            .success();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "file bytes");
    }

    #[test]
    fn list_empty_cache() {
        let root = TempDir::new().unwrap();

        pouch(&root)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache is empty"));

        pouch(&root)
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[]"));
    }

    #[test]
    fn list_shows_saved_entries() {
        let root = TempDir::new().unwrap();
        let id = save(&root, "subfinder scan", "example.com");

        pouch(&root)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains(&id))
            .stdout(predicate::str::contains("subfinder scan"));

        pouch(&root)
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains(&id));
    }

    #[test]
    fn clear_one_then_miss() {
        let root = TempDir::new().unwrap();
        let id = save(&root, "doomed", "bytes");

        pouch(&root)
            .args(["clear", &id])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cleared"));

        pouch(&root)
            .args(["get", &id])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No cached entry"));

        pouch(&root)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache is empty"));
    }

    #[test]
    fn clear_all_then_save_again() {
        let root = TempDir::new().unwrap();
        save(&root, "one", "1");
        save(&root, "two", "2");

        pouch(&root)
            .args(["clear", "--all"])
            .assert()
            .success()
            .stdout(predicate::str::contains("All cache entries cleared"));

        pouch(&root)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache is empty"));

        // The reset cache accepts new saves
        let id = save(&root, "fresh", "3");
        pouch(&root).args(["get", &id]).assert().success().stdout("3");
    }

    #[test]
    fn clear_requires_a_target() {
        let root = TempDir::new().unwrap();

        pouch(&root).arg("clear").assert().failure();
    }

    #[test]
    fn duplicate_labels_are_independent_entries() {
        let root = TempDir::new().unwrap();
        let a = save(&root, "same", "first");
        let b = save(&root, "same", "second");

        assert_ne!(a, b);
        pouch(&root).args(["get", &a]).assert().success().stdout("first");
        pouch(&root).args(["get", &b]).assert().success().stdout("second");
    }

    #[test]
    fn payload_cap_is_enforced() {
        let root = TempDir::new().unwrap();
        let config = root.path().join("config.toml");
        std::fs::write(&config, "[cache]\nmax_payload_bytes = 4\n").unwrap();

        pouch(&root)
            .arg("--config")
            .arg(&config)
            .args(["save", "-l", "too big"])
            .write_stdin("way more than four bytes")
            .assert()
            .failure()
            .stderr(predicate::str::contains("exceeds the configured limit"));
    }

    #[test]
    fn bad_config_is_reported() {
        let root = TempDir::new().unwrap();
        let config = root.path().join("config.toml");
        std::fs::write(&config, "cache = [broken").unwrap();

        pouch(&root)
            .arg("--config")
            .arg(&config)
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }

    #[test]
    fn completions_generate() {
        cargo_bin_cmd!("pouch")
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("pouch"));
    }
}
