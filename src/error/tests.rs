// modbuild: Mod Build Metadata Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{ConfigError, FsError, ModbuildError, ModbuildResult, PublishError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::missing("project", "id");
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'id' in section '[project]'");
}

#[test]
fn test_invalid_credentials_display() {
    let err = PublishError::InvalidCredentials {
        url: "https://maven.example.com".to_string(),
        missing: "password".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"incomplete credentials for https://maven.example.com: missing password");
}

#[test]
fn test_fs_error_classification() {
    let path = Path::new("/nope");
    let not_found = FsError::from_io(path, std::io::Error::from(std::io::ErrorKind::NotFound));
    let denied = FsError::from_io(
        path,
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    );
    let other = FsError::from_io(path, std::io::Error::other("disk full"));

    assert!(matches!(not_found, FsError::NotFound(_)));
    assert!(matches!(denied, FsError::PermissionDenied(_)));
    assert!(matches!(other, FsError::IoError { .. }));
}

#[test]
fn test_boxed_conversion() {
    let err: ModbuildError = ConfigError::missing("loader", "version").into();
    insta::assert_snapshot!(err.to_string(), @"config error: missing required config key 'version' in section '[loader]'");
}

#[test]
fn test_modbuild_error_size() {
    let size = std::mem::size_of::<ModbuildError>();
    assert!(size <= 24, "ModbuildError is {size} bytes, expected <= 24");
}

#[test]
fn test_modbuild_result_size() {
    let size = std::mem::size_of::<ModbuildResult<()>>();
    assert!(size <= 24, "ModbuildResult<()> is {size} bytes, expected <= 24");
}
