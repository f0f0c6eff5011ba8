use std::fmt;
use std::str::FromStr;

use crate::options::ResolveError;

/// Image disk size in MB for infrastructures that attach an ephemeral disk
const DEFAULT_DISK_SIZE: u64 = 2048;

/// Image disk size in MB when the whole system has to fit on the root disk
const NO_EPHEMERAL_DISK_SIZE: u64 = 10240;

/// Infrastructures a stemcell can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Infrastructure {
  Aws,
  Vsphere,
  Openstack,
}

impl Infrastructure {
  pub const ALL: [Infrastructure; 3] = [Self::Aws, Self::Vsphere, Self::Openstack];

  /// Returns the lowercase tag used in options and on the command line
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Aws => "aws",
      Self::Vsphere => "vsphere",
      Self::Openstack => "openstack",
    }
  }

  /// Hypervisor used when the environment does not name one
  pub fn default_hypervisor(&self) -> &'static str {
    match self {
      Self::Aws => "xen",
      Self::Vsphere => "esxi",
      Self::Openstack => "kvm",
    }
  }

  /// Whether instances get a transient local disk next to the root disk
  pub fn has_ephemeral_disk(&self) -> bool {
    !matches!(self, Self::Openstack)
  }

  /// Image disk size in MB used when the caller does not request one
  pub fn default_disk_size(&self) -> u64 {
    if self.has_ephemeral_disk() {
      DEFAULT_DISK_SIZE
    } else {
      NO_EPHEMERAL_DISK_SIZE
    }
  }
}

impl fmt::Display for Infrastructure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Infrastructure {
  type Err = ResolveError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "" => Err(ResolveError::MissingInfrastructure),
      "aws" => Ok(Self::Aws),
      "vsphere" => Ok(Self::Vsphere),
      "openstack" => Ok(Self::Openstack),
      other => Err(ResolveError::UnknownInfrastructure(other.to_string())),
    }
  }
}
