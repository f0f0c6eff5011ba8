//! Tests for `stemcell build --dry-run`.

use predicates::prelude::*;

use super::common::{TestEnv, read};

#[test]
fn dry_run_stages_workspace_and_writes_settings() {
  let env = TestEnv::new();

  env
    .stemcell_cmd()
    .args(["build", "stemcell-aws", "-i", "aws", "--dry-run"])
    .env("STEMCELL_NAME", "bosh-stemcell")
    .assert()
    .success()
    .stdout(predicate::str::contains("Dry run of 'stemcell-aws' complete"));

  let build_dir = env.build_root().join("build");
  assert!(build_dir.join("bin/build_from_spec.sh").is_file());
  assert!(build_dir.join("spec/stemcell-aws.spec").is_file());
  assert!(build_dir.join("stages/base_debootstrap/apply.sh").is_file());
  assert!(env.build_root().join("work").is_dir());

  let settings = read(&build_dir.join("etc/settings.bash"));
  assert!(settings.contains("stemcell_infrastructure=aws\n"));
  assert!(settings.contains("stemcell_name=bosh-stemcell\n"));
  assert!(settings.contains("image_create_disk_size=2048\n"));
}

#[test]
fn dry_run_reports_elevated_builder_command() {
  let env = TestEnv::new();
  let build_dir = env.build_root().join("build");

  env
    .stemcell_cmd()
    .args(["build", "stemcell-aws", "-i", "aws", "--dry-run"])
    .env("HTTP_PROXY", "http://proxy:3128")
    .assert()
    .success()
    .stdout(predicate::str::contains("sudo env HTTP_PROXY='http://proxy:3128'"))
    .stdout(predicate::str::contains(
      build_dir.join("bin/build_from_spec.sh").display().to_string(),
    ))
    .stdout(predicate::str::contains(
      build_dir.join("spec/stemcell-aws.spec").display().to_string(),
    ));
}

#[test]
fn verbose_dry_run_logs_instead_of_running() {
  TestEnv::new()
    .stemcell_cmd()
    .args(["build", "stemcell-aws", "-i", "aws", "--dry-run", "--verbose"])
    .assert()
    .success()
    .stderr(predicate::str::contains("dry run, not executing command"));
}

#[test]
fn work_path_override_is_honored() {
  let env = TestEnv::new();
  let work = env.temp.path().join("elsewhere");

  env
    .stemcell_cmd()
    .args(["build", "stemcell-aws", "-i", "openstack", "--dry-run"])
    .env("WORK_PATH", &work)
    .assert()
    .success();

  assert!(work.is_dir());
  assert!(!env.build_root().join("work").exists());
}
