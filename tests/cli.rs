use std::process::{Command, Output};

use qc_core::constants::{ENV_DATASET_ID, ENV_OUTPUT_DIR};

fn demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qcflow-demo")).args(args)
                                                   .env_remove(ENV_OUTPUT_DIR)
                                                   .env_remove(ENV_DATASET_ID)
                                                   .output()
                                                   .expect("run qcflow-demo")
}

#[test]
fn missing_arguments_exit_with_usage_code() {
    let out = demo(&["flagstats"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("usage: qcflow-demo"));
    assert!(out.stdout.is_empty());
}

#[test]
fn unknown_kind_fails_with_message() {
    let out = demo(&["coverage", "s1.cov"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown file kind: coverage"));
    assert!(out.stdout.is_empty());
}

#[test]
fn prints_job_manifest_json() {
    let out = demo(&["insertsizes", "sample1.insertsizes.txt", "job-5"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["job_id"], "job-5");
    let files = v["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["kind"], "InsertSizesText");
    assert_eq!(files[0]["path"], "sample1.insertsizes.txt");
    assert_eq!(files[0]["job"]["tool_id"], "qcflow-demo");
    assert_eq!(files[0]["fingerprint"].as_str().unwrap().len(), 64);
}

#[test]
fn default_job_id_is_used_when_omitted() {
    let out = demo(&["flagstats", "s.flagstat"]);
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["job_id"], "demo-job");
}
