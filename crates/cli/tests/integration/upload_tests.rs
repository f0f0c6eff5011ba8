//! Tests for `stemcell upload`.

use predicates::prelude::*;

use super::common::{ACCESS_KEY_VAR, SECRET_KEY_VAR, TestEnv, read};

#[test]
fn uploads_file_into_existing_bucket() {
  let env = TestEnv::new();
  let store = env.store_with_bucket("bosh-jenkins-artifacts");
  let file = env.write_file("out/light-stemcell.tgz", "stemcell bytes");

  env
    .stemcell_cmd()
    .arg("upload")
    .arg("--store")
    .arg(&store)
    .args(["--bucket", "bosh-jenkins-artifacts", "--key", "aws/light-stemcell.tgz", "--public"])
    .arg(&file)
    .env(ACCESS_KEY_VAR, "id")
    .env(SECRET_KEY_VAR, "secret")
    .assert()
    .success()
    .stdout(predicate::str::contains("Uploaded"))
    .stdout(predicate::str::contains("Size: 14 bytes"))
    .stdout(predicate::str::contains("Public: yes"));

  assert_eq!(
    read(&store.join("bosh-jenkins-artifacts/aws/light-stemcell.tgz")),
    "stemcell bytes"
  );
}

#[test]
fn missing_bucket_fails_without_creating_it() {
  let env = TestEnv::new();
  let store = env.store_with_bucket("other");
  let file = env.write_file("artifact", "x");

  env
    .stemcell_cmd()
    .arg("upload")
    .arg("--store")
    .arg(&store)
    .args(["--bucket", "absent", "--key", "k"])
    .arg(&file)
    .env(ACCESS_KEY_VAR, "id")
    .env(SECRET_KEY_VAR, "secret")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("bucket 'absent' not found"));

  assert!(!store.join("absent").exists());
}

#[test]
fn missing_credentials_are_reported() {
  let env = TestEnv::new();
  let store = env.store_with_bucket("b");
  let file = env.write_file("artifact", "x");

  env
    .stemcell_cmd()
    .arg("upload")
    .arg("--store")
    .arg(&store)
    .args(["--bucket", "b", "--key", "k"])
    .arg(&file)
    .assert()
    .code(1)
    .stderr(predicate::str::contains(ACCESS_KEY_VAR));
}
