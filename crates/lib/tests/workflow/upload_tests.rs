//! Upload tests against a directory-backed store.

use stemcell_lib::Environment;
use stemcell_lib::env::vars;
use stemcell_lib::upload::{LocalStore, ObjectStore, StorageError, UploadAdapter};
use tempfile::TempDir;

fn credentials_env() -> Environment {
  Environment::empty()
    .with(vars::AWS_ACCESS_KEY_ID, "id")
    .with(vars::AWS_SECRET_ACCESS_KEY, "secret")
}

#[test]
fn upload_round_trips_through_local_store() {
  let temp = TempDir::new().unwrap();
  let store = LocalStore::new(temp.path());
  store.create_bucket("bosh-jenkins-artifacts").unwrap();

  let adapter = UploadAdapter::from_env(store, &credentials_env()).unwrap();
  let info = adapter
    .upload("bosh-jenkins-artifacts", "bosh-stemcell/aws/latest.tgz", b"stemcell", true)
    .unwrap();

  assert_eq!(info.size, 8);
  assert_eq!(
    adapter
      .store()
      .get_object("bosh-jenkins-artifacts", "bosh-stemcell/aws/latest.tgz")
      .unwrap(),
    Some(b"stemcell".to_vec())
  );
}

#[test]
fn upload_to_missing_bucket_names_it() {
  let temp = TempDir::new().unwrap();
  let adapter = UploadAdapter::from_env(LocalStore::new(temp.path()), &credentials_env()).unwrap();

  let err = adapter.upload("missing-bucket", "k", b"x", false).unwrap_err();

  assert!(matches!(err, StorageError::BucketNotFound(ref b) if b == "missing-bucket"));
  assert!(!temp.path().join("missing-bucket").exists());
}
