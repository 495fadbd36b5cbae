//
// emoji-list - emoji-list binary crate.
//
// Copyright 2026 emoji-list contributors
//
// This file is part of emoji-list.
//
// emoji-list is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emoji-list is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emoji-list. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later


use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use assert_cmd::{assert::OutputAssertExt, Command};
use predicates::prelude::*;
use rusty_fork::rusty_fork_test;
use tempfile::TempDir;

rusty_fork_test! {
#[test]
fn test_cli_subcommands() {
    run_cli_subcommands();
}
}

type Env = BTreeMap<&'static str, PathBuf>;

fn excerpt_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../emojilib/tests/data/emoji-test-excerpt.txt")
}

fn make_common_env(temp_dir: &Path) -> Env {
    let mut common_env = BTreeMap::default();
    for (var, dir) in [
        ("HOME", temp_dir.to_path_buf()),
        ("XDG_CONFIG_HOME", temp_dir.join(".config")),
        ("XDG_DATA_HOME", temp_dir.join(".local/share")),
    ] {
        std::fs::create_dir_all(&dir).unwrap_or_else(|err| {
            panic!("Could not create {} path, {}: {}", var, dir.display(), err);
        });
        common_env.insert(var, dir);
    }
    common_env
}

fn cmd(env: &Env) -> Command {
    let mut cmd = Command::cargo_bin("emoji-list").unwrap();
    cmd.env_clear().envs(env);
    cmd
}

fn version(env: &Env) {
    for arg in ["--version", "-V"] {
        let output = cmd(env).arg(arg).output().unwrap().assert();
        output
            .code(0)
            .stdout(predicates::str::starts_with("emoji-list "));
    }
}

fn help(env: &Env) {
    for arg in ["--help", "-h"] {
        let output = cmd(env).arg(arg).output().unwrap().assert();
        output
            .code(0)
            .stdout(predicates::str::contains("Unicode emoji registry parser"))
            .stdout(predicates::str::contains("USAGE"))
            .stdout(predicates::str::contains("SUBCOMMANDS"))
            .stdout(predicates::str::contains("parse"))
            .stdout(predicates::str::contains("stats"))
            .stdout(predicates::str::contains("groups"))
            .stdout(predicates::str::contains("print-default-config"))
            .stdout(predicates::str::contains("print-config-path"))
            .stdout(predicates::str::contains("test-config"));
    }
}

fn test_subcommand_parse(env: &Env) {
    let output = cmd(env)
        .arg("parse")
        .arg("--input")
        .arg(excerpt_path())
        .output()
        .unwrap();
    output
        .clone()
        .assert()
        .code(0)
        .stdout(predicates::str::contains(r#""name":"E0.6 keycap: #""#));
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 20);
    assert_eq!(records[9]["name"], "E4.0 man health worker: dark skin tone");
    assert_eq!(records[9]["emoji_version"], "E4.0");
    assert_eq!(
        records[9]["search_terms"],
        serde_json::json!(["e40", "man", "health", "worker", "dark", "skin", "tone"])
    );
    assert_eq!(records[12]["skin_tones"], serde_json::json!(["medium-dark", "medium"]));

    let output = cmd(env)
        .args(["parse", "--displayable", "--pretty", "--input", "-"])
        .write_stdin(std::fs::read(excerpt_path()).unwrap())
        .output()
        .unwrap();
    output.clone().assert().code(0).stdout(predicates::str::starts_with("[\n"));
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 17);
    assert!(records
        .iter()
        .all(|r| r["qualification"] == "fully-qualified" || r["qualification"] == "component"));
}

fn test_subcommand_stats(env: &Env) {
    let output = cmd(env)
        .arg("stats")
        .arg("-i")
        .arg(excerpt_path())
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::contains("total: 20\n"))
        .stdout(predicates::str::contains("fully-qualified: 15\n"))
        .stdout(predicates::str::contains("minimally-qualified: 1\n"))
        .stdout(predicates::str::contains("unqualified: 2\n"))
        .stdout(predicates::str::contains("with skin tone: 7\n"))
        .stdout(predicates::str::contains("displayable: 17\n"))
        .stdout(predicates::str::contains("  People & Body: 9\n"));
}

fn test_subcommand_groups(env: &Env) {
    let output = cmd(env)
        .arg("groups")
        .arg("--input")
        .arg(excerpt_path())
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout(predicate::eq(
        "Smileys & Emotion\nPeople & Body\nComponent\nActivities\nSymbols\nFlags\n",
    ));
}

fn test_source_unavailable(env: &Env, dir: &Path) {
    let output = cmd(env)
        .arg("parse")
        .arg("--input")
        .arg(dir.join("does-not-exist.txt"))
        .output()
        .unwrap()
        .assert();
    output
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains(
            "Could not retrieve the emoji list from",
        ));

    let output = cmd(env)
        .args(["parse", "--input", "-"])
        .write_stdin(b"".as_slice())
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout(predicate::eq("[]\n"));
}

fn test_subcommand_config(env: &Env, dir: &Path) {
    let output = cmd(env)
        .arg("print-default-config")
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::contains("[source]"))
        .stdout(predicates::str::contains("[log]"));

    let output = cmd(env).arg("print-config-path").output().unwrap().assert();
    output.code(0).stdout(predicate::eq(format!(
        "{}\n",
        dir.join(".config/emoji-list/config.toml").display()
    )));

    // No configuration file yet.
    let output = cmd(env).arg("test-config").output().unwrap().assert();
    output.code(1).stderr(predicates::str::is_empty().not());

    let output = cmd(env)
        .args(["test-config", "-"])
        .write_stdin(b"[log]\nlevel = \"DEBUG\"\n".as_slice())
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout(predicates::str::is_empty());

    let output = cmd(env)
        .args(["test-config", "-"])
        .write_stdin(b"[source]\nmirror = \"https://example.com\"\n".as_slice())
        .output()
        .unwrap()
        .assert();
    output
        .code(1)
        .stderr(predicates::str::contains("mirror"));
}

fn test_config_file_source(env: &Env, dir: &Path) {
    let conf_path = dir.join("conf.toml");
    let log_path = dir.join("emoji-list.log");
    std::fs::write(
        &conf_path,
        format!(
            "[source]\npath = {:?}\n\n[log]\nlevel = \"INFO\"\nfile = {:?}\n",
            excerpt_path().display().to_string(),
            log_path.display().to_string()
        ),
    )
    .unwrap();

    let output = cmd(env)
        .arg("-c")
        .arg(&conf_path)
        .arg("test-config")
        .arg(&conf_path)
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout(predicates::str::is_empty());

    // The configured path is used when no --input is given.
    let output = cmd(env)
        .arg("--config")
        .arg(&conf_path)
        .arg("groups")
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::starts_with("Smileys & Emotion\n"));
    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Retrieved"), "{}", log);

    let mut env = env.clone();
    env.insert("EMOJI_LIST_CONFIG", conf_path.clone());
    let output = cmd(&env).arg("print-config-path").output().unwrap().assert();
    output
        .code(0)
        .stdout(predicate::eq(format!("{}\n", conf_path.display())));
}

fn run_cli_subcommands() {
    for var in [
        "EMOJI_LIST_CONFIG",
        "EMOJI_LIST_DEBUG_STDERR",
        "HOME",
        "XDG_CONFIG_DIRS",
        "XDG_CONFIG_HOME",
        "XDG_DATA_DIRS",
        "XDG_DATA_HOME",
    ] {
        std::env::remove_var(var);
    }

    let tmp_dir = TempDir::new().unwrap();
    let common_env = make_common_env(tmp_dir.path());

    version(&common_env);
    help(&common_env);
    test_subcommand_parse(&common_env);
    test_subcommand_stats(&common_env);
    test_subcommand_groups(&common_env);
    test_source_unavailable(&common_env, tmp_dir.path());
    test_subcommand_config(&common_env, tmp_dir.path());
    test_config_file_source(&common_env, tmp_dir.path());

    tmp_dir.close().unwrap();
}
