// We use assert_cmd for spawning the compiled binary and
// capturing stdout/stderr in a platform-agnostic way.
use assert_cmd::prelude::*;
use std::process::Command;
// Temporary on-disk fixtures keep tests hermetic.
use assert_fs::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

// Helper: a small query tree with a variable, an engine switch, an
// include and a comment, enough to exercise every output mode.
fn make_fixture() -> assert_fs::TempDir {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("recon.dork")
        .write_str(
            "# recon\n\
             @var TARGET = default.com\n\
             site:$TARGET filetype:pdf   # docs\n\
             @engine github\n\
             $TARGET password\n\
             @include extra.dork\n",
        )
        .expect("write recon.dork");
    tmp.child("extra.dork")
        .write_str("@engine fofa\ndomain=\"$TARGET\"\n")
        .expect("write extra.dork");
    tmp
}

fn dork() -> Command {
    let mut cmd = Command::cargo_bin("dork").expect("bin");
    // Keep ambient log filters and env overrides out of the tests
    cmd.env_remove("RUST_LOG")
        .env_remove("DORKSCRIPT_DEFAULT_ENGINE")
        .env_remove("DORKSCRIPT_VARIABLES__TARGET");
    cmd
}

#[test]
fn urls_mode_prints_one_url_per_line() {
    let tmp = make_fixture();

    let assert = dork()
        .current_dir(tmp.path())
        .args(["run", "recon.dork", "--urls"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "https://www.google.com/search?q=site%3Adefault.com%20filetype%3Apdf",
            "https://github.com/search?q=default.com%20password",
            "https://en.fofa.info/result?qbase64=ZG9tYWluPSJkZWZhdWx0LmNvbSI=",
        ]
    );
}

#[test]
fn cli_variable_overrides_file_definition() {
    let tmp = make_fixture();

    dork()
        .current_dir(tmp.path())
        .args(["run", "recon.dork", "TARGET=real.com", "-u", "-n", "1"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=site%3Areal.com%20filetype%3Apdf\n");
}

#[test]
fn engine_override_applies_to_every_query() {
    let tmp = make_fixture();

    let assert = dork()
        .current_dir(tmp.path())
        .args(["run", "recon.dork", "-u", "-e", "BING"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|l| l.starts_with("https://www.bing.com/search?q=")));
}

#[test]
fn unknown_engine_override_fails_before_parsing() {
    let tmp = make_fixture();

    dork()
        .current_dir(tmp.path())
        .args(["run", "recon.dork", "-e", "nope", "-u"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown engine 'nope'"));
}

#[test]
fn missing_file_exits_with_code_two() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    dork()
        .current_dir(tmp.path())
        .args(["run", "absent.dork", "-u"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn preview_lists_queries_with_urls() {
    let tmp = make_fixture();

    dork()
        .current_dir(tmp.path())
        .args(["--no-color", "run", "recon.dork", "--preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DorkScript: recon.dork"))
        .stdout(predicate::str::contains("Queries: 3"))
        .stdout(predicate::str::contains("[2] default.com password"))
        .stdout(predicate::str::contains("@github"))
        .stdout(predicate::str::contains("https://github.com/search?q=default.com%20password"))
        .stdout(predicate::str::contains("Preview mode - no browsers opened"));
}

#[test]
fn output_file_gets_url_list() {
    let tmp = make_fixture();

    dork()
        .current_dir(tmp.path())
        .args(["--no-color", "run", "recon.dork", "-o", "urls.txt", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 URLs to urls.txt"));

    let text = std::fs::read_to_string(tmp.child("urls.txt").path()).expect("read urls.txt");
    assert_eq!(text.lines().count(), 3);
    assert!(text.ends_with('\n'));
    assert!(text.lines().all(|l| l.starts_with("https://")));
}

#[test]
fn dry_run_skips_output_file() {
    let tmp = make_fixture();

    dork()
        .current_dir(tmp.path())
        .args(["--dry-run", "run", "recon.dork", "-o", "urls.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"));

    tmp.child("urls.txt").assert(predicate::path::missing());
}

#[test]
fn json_mode_includes_record_fields() {
    let tmp = make_fixture();

    let assert = dork()
        .current_dir(tmp.path())
        .args(["run", "recon.dork", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let v: Value = serde_json::from_str(&stdout).expect("json");
    let items = v.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["query"], "site:default.com filetype:pdf");
    assert_eq!(items[0]["original"], "site:$TARGET filetype:pdf");
    assert_eq!(items[0]["line"], 3);
    assert_eq!(items[2]["file"], "extra.dork");
    assert_eq!(items[2]["engine"], "fofa");
    assert!(items[1]["url"].as_str().unwrap().starts_with("https://github.com/"));
}

#[test]
fn empty_file_reports_no_queries() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("empty.dork").write_str("# nothing\n@var X = 1\n").expect("write");

    dork()
        .current_dir(tmp.path())
        .args(["run", "empty.dork", "--preview"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No queries found in file."));

    dork()
        .current_dir(tmp.path())
        .args(["run", "empty.dork", "--urls"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("No queries").not());
}

#[test]
fn warnings_go_to_stderr_and_do_not_block_output() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("w.dork")
        .write_str("@engine foo\nsite:$MISSING\n")
        .expect("write");

    dork()
        .current_dir(tmp.path())
        .args(["run", "w.dork", "-u"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=site%3A%24MISSING\n")
        .stderr(predicate::str::contains("Unknown engine 'foo'"))
        .stderr(predicate::str::contains("Undefined variable(s): MISSING"));
}

#[test]
fn check_fails_on_warnings_and_passes_clean_files() {
    let tmp = make_fixture();
    tmp.child("bad.dork").write_str("$NOPE\n").expect("write");

    dork()
        .current_dir(tmp.path())
        .args(["--no-color", "check", "recon.dork"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 queries"))
        .stdout(predicate::str::contains("no warnings"));

    dork()
        .current_dir(tmp.path())
        .args(["--no-color", "check", "bad.dork"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Undefined variable(s): NOPE"));
}

#[test]
fn engines_listing_and_category_filter() {
    dork()
        .args(["--no-color", "engines"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Security & OSINT"))
        .stdout(predicate::str::contains("shodan"));

    dork()
        .args(["--no-color", "engines", "--category", "archives"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://web.archive.org/web/*/"))
        .stdout(predicate::str::contains("shodan").not());

    dork()
        .args(["engines", "--category", "bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown category 'bogus'"));
}

#[test]
fn config_file_supplies_default_engine() {
    let tmp = make_fixture();
    tmp.child("dorkscript.toml")
        .write_str("default_engine = \"ddg\"\n")
        .expect("write config");

    let assert = dork()
        .current_dir(tmp.path())
        .args(["run", "recon.dork", "-u", "-n", "1"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert!(stdout.starts_with("https://duckduckgo.com/?q="), "{stdout}");
}

#[test]
fn env_variable_override_keeps_its_case() {
    let tmp = make_fixture();

    dork()
        .current_dir(tmp.path())
        .env("DORKSCRIPT_VARIABLES__TARGET", "env.com")
        .args(["run", "recon.dork", "-u", "-n", "1"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=site%3Aenv.com%20filetype%3Apdf\n")
        .stderr(predicate::str::contains("Undefined").not());
}

#[test]
fn config_file_variables_expand_in_queries() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("q.dork").write_str("site:$TARGET\n").expect("write q.dork");
    tmp.child("dorkscript.toml")
        .write_str("[variables]\nTARGET = \"cfg.com\"\n")
        .expect("write config");

    dork()
        .current_dir(tmp.path())
        .args(["run", "q.dork", "-u"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=site%3Acfg.com\n");

    // CLI tokens still win over the config file
    dork()
        .current_dir(tmp.path())
        .args(["run", "q.dork", "TARGET=cli.com", "-u"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=site%3Acli.com\n");
}

#[test]
fn malformed_config_warns_and_falls_back() {
    let tmp = make_fixture();
    tmp.child("dorkscript.toml")
        .write_str("delay_secs = \"x\"\ndefault_engine = \"ddg\"\n")
        .expect("write config");

    dork()
        .current_dir(tmp.path())
        .args(["run", "recon.dork", "-u", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://www.google.com/"))
        .stderr(predicate::str::contains("Failed to parse configuration"))
        .stderr(predicate::str::contains("using default configuration"));
}

#[test]
fn overrides_may_come_before_the_file() {
    let tmp = make_fixture();

    dork()
        .current_dir(tmp.path())
        .args(["run", "TARGET=real.com", "recon.dork", "-u", "-n", "1"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=site%3Areal.com%20filetype%3Apdf\n");

    dork()
        .current_dir(tmp.path())
        .args(["run", "TARGET=real.com", "-u"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No query file given"));
}

#[test]
fn unknown_engine_warning_names_the_engine_kept() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    tmp.child("w.dork")
        .write_str("@engine bing\n@engine nope\nq\n")
        .expect("write");

    dork()
        .current_dir(tmp.path())
        .args(["run", "w.dork", "-u"])
        .assert()
        .success()
        .stdout("https://www.bing.com/search?q=q\n")
        .stderr(predicate::str::contains("Unknown engine 'nope', keeping bing"));
}

#[test]
fn init_writes_config_once() {
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    dork()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();
    tmp.child("dorkscript.toml")
        .assert(predicate::str::contains("delay_secs"));

    dork()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn completions_to_stdout() {
    dork()
        .args(["completions", "bash", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dork"));
}
