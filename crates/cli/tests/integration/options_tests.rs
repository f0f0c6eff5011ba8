//! Tests for `stemcell options`.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn prints_resolved_options_as_lines() {
  let env = TestEnv::new();

  let output = env
    .stemcell_cmd()
    .args(["options", "--infrastructure", "vsphere"])
    .env("STEMCELL_NAME", "bosh-stemcell")
    .output()
    .unwrap();

  assert!(output.status.success());
  let stdout = String::from_utf8(output.stdout).unwrap();
  let lines: Vec<&str> = stdout.lines().collect();

  assert!(lines.contains(&"stemcell_infrastructure=vsphere"));
  assert!(lines.contains(&"system_parameters_infrastructure=vsphere"));
  assert!(lines.contains(&"stemcell_hypervisor=esxi"));
  assert!(lines.contains(&"stemcell_name=bosh-stemcell"));
  assert!(lines.contains(&"bosh_protocol_version=1"));
  assert!(lines.contains(&"image_create_disk_size=2048"));
  assert!(lines.contains(&"ruby_bin=/opt/ruby/bin/ruby"));
  assert!(!stdout.contains("UBUNTU_ISO"));
}

#[test]
fn openstack_gets_larger_default_disk() {
  TestEnv::new()
    .stemcell_cmd()
    .args(["options", "-i", "openstack"])
    .assert()
    .success()
    .stdout(predicate::str::contains("image_create_disk_size=10240"))
    .stdout(predicate::str::contains("stemcell_hypervisor=kvm"));
}

#[test]
fn disk_size_and_set_override_defaults() {
  TestEnv::new()
    .stemcell_cmd()
    .args(["options", "-i", "aws", "--disk-size", "4096", "--set", "stemcell_hypervisor=hvm"])
    .assert()
    .success()
    .stdout(predicate::str::contains("image_create_disk_size=4096"))
    .stdout(predicate::str::contains("stemcell_hypervisor=hvm"))
    .stdout(predicate::str::contains("stemcell_hypervisor=xen").not());
}

#[test]
fn micro_flags_add_micro_options() {
  let env = TestEnv::new();

  env
    .stemcell_cmd()
    .args(["options", "-i", "aws", "--micro-manifest", "micro.yml", "--micro-tarball", "micro.tgz"])
    .assert()
    .success()
    .stdout(predicate::str::contains("bosh_micro_enabled=yes"))
    .stdout(predicate::str::contains("bosh_micro_manifest_yml_path=micro.yml"))
    .stdout(predicate::str::contains("bosh_micro_release_tgz_path=micro.tgz"))
    .stdout(predicate::str::contains(format!(
      "bosh_micro_package_compiler_path={}",
      env.src_root().join("package_compiler").display()
    )));
}

#[test]
fn json_output_keeps_integer_disk_size() {
  let output = TestEnv::new()
    .stemcell_cmd()
    .args(["options", "-i", "aws", "--json"])
    .output()
    .unwrap();

  assert!(output.status.success());
  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["image_create_disk_size"], serde_json::json!(2048));
  assert_eq!(json["stemcell_infrastructure"], serde_json::json!("aws"));
  assert_eq!(json["bosh_protocol_version"], serde_json::json!("1"));
}

#[test]
fn ovftool_is_reported_for_any_infrastructure() {
  TestEnv::new()
    .stemcell_cmd()
    .args(["options", "-i", "aws"])
    .env("OVFTOOL", "/usr/bin/ovftool")
    .assert()
    .success()
    .stdout(predicate::str::contains("image_vsphere_ovf_ovftool_path=/usr/bin/ovftool"));
}
