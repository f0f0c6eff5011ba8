//! Resolve-then-build tests against a real filesystem.

use std::fs;

use stemcell_lib::build::StemcellBuilder;
use stemcell_lib::execute::FsCopier;
use stemcell_lib::options::{OptionsResolver, keys};
use stemcell_lib::Overrides;

use super::common::{CapturingRunner, Checkout};

#[test]
fn resolved_options_reach_the_staged_workspace() {
  let checkout = Checkout::new();
  let env = checkout.env().with("STEMCELL_NAME", "bosh-stemcell");

  let resolver = OptionsResolver::new(env.clone(), checkout.sources(), checkout.interpreter());
  let options = resolver.resolve(Some("aws"), &Overrides::default()).unwrap();

  let runner = CapturingRunner::default();
  let builder = StemcellBuilder::new(env, &runner, FsCopier).with_sources(checkout.sources());
  builder.build("stemcell-aws", &options).unwrap();

  let build_dir = checkout.build_root().join("build");
  assert!(build_dir.join("bin/build_from_spec.sh").is_file());
  assert!(build_dir.join("spec/stemcell-aws.spec").is_file());
  assert!(build_dir.join("stages/base_debootstrap/apply.sh").is_file());

  let settings = fs::read_to_string(build_dir.join("etc/settings.bash")).unwrap();
  assert!(settings.contains("stemcell_name=bosh-stemcell\n"));
  assert!(settings.contains("stemcell_hypervisor=xen\n"));
  assert!(settings.contains("image_create_disk_size=2048\n"));
  assert!(settings.contains("ruby_bin=/opt/ruby/bin/ruby\n"));
  assert!(!settings.contains("builder_default"));

  let commands = runner.commands.lock().unwrap();
  assert_eq!(commands.len(), 1);
  assert_eq!(
    commands[0].args(),
    &[
      checkout.build_root().join("work").to_string_lossy().into_owned(),
      build_dir.join("spec/stemcell-aws.spec").to_string_lossy().into_owned(),
      build_dir.join("etc/settings.bash").to_string_lossy().into_owned(),
    ]
  );
}

#[test]
fn micro_options_merge_into_build_settings() {
  let checkout = Checkout::new();
  let env = checkout.env();

  let resolver = OptionsResolver::new(env.clone(), checkout.sources(), checkout.interpreter());
  let options = resolver
    .resolve(Some("openstack"), &Overrides::default())
    .unwrap()
    .merged(&resolver.micro_options("micro.yml", "release.tgz"));

  assert_eq!(options.get_int(keys::IMAGE_CREATE_DISK_SIZE), Some(10240));

  let runner = CapturingRunner::default();
  StemcellBuilder::new(env, &runner, FsCopier)
    .with_sources(checkout.sources())
    .build("stemcell-aws", &options)
    .unwrap();

  let settings = fs::read_to_string(checkout.build_root().join("build/etc/settings.bash")).unwrap();
  assert!(settings.contains("bosh_micro_enabled=yes\n"));
  assert!(settings.contains("bosh_micro_manifest_yml_path=micro.yml\n"));
  assert!(settings.contains("bosh_micro_release_tgz_path=release.tgz\n"));
}
