//! Option names understood by the stemcell builder.

pub const SYSTEM_PARAMETERS_INFRASTRUCTURE: &str = "system_parameters_infrastructure";
pub const STEMCELL_INFRASTRUCTURE: &str = "stemcell_infrastructure";
pub const STEMCELL_NAME: &str = "stemcell_name";
pub const STEMCELL_HYPERVISOR: &str = "stemcell_hypervisor";
pub const BOSH_PROTOCOL_VERSION: &str = "bosh_protocol_version";
pub const UBUNTU_ISO: &str = "UBUNTU_ISO";
pub const UBUNTU_MIRROR: &str = "UBUNTU_MIRROR";
pub const TW_LOCAL_PASSPHRASE: &str = "TW_LOCAL_PASSPHRASE";
pub const TW_SITE_PASSPHRASE: &str = "TW_SITE_PASSPHRASE";
pub const RUBY_BIN: &str = "ruby_bin";
pub const BOSH_RELEASE_SRC_DIR: &str = "bosh_release_src_dir";
pub const BOSH_AGENT_SRC_DIR: &str = "bosh_agent_src_dir";
pub const IMAGE_CREATE_DISK_SIZE: &str = "image_create_disk_size";
pub const IMAGE_VSPHERE_OVF_OVFTOOL_PATH: &str = "image_vsphere_ovf_ovftool_path";

pub const BOSH_MICRO_ENABLED: &str = "bosh_micro_enabled";
pub const BOSH_MICRO_PACKAGE_COMPILER_PATH: &str = "bosh_micro_package_compiler_path";
pub const BOSH_MICRO_MANIFEST_YML_PATH: &str = "bosh_micro_manifest_yml_path";
pub const BOSH_MICRO_RELEASE_TGZ_PATH: &str = "bosh_micro_release_tgz_path";
