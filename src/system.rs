// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Read-only accessors for properties of the running process and platform.
//!
//! Each [`Property`] has a dotted key (such as `os.name`) and is resolved on
//! every call, so changes to the environment are picked up. Properties that
//! cannot be determined resolve to `None`.

use crate::error::Error;
use std::{env, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Version of this crate.
    CrateVersion,
    /// Operating system name, as in [`std::env::consts::OS`].
    OsName,
    /// CPU architecture, as in [`std::env::consts::ARCH`].
    OsArch,
    /// Operating system family, as in [`std::env::consts::FAMILY`].
    OsFamily,
    FileSeparator,
    PathSeparator,
    LineSeparator,
    /// Account name of the current user.
    UserName,
    /// Home directory of the current user.
    UserHome,
    /// Current working directory.
    UserDir,
}

impl Property {
    pub const ALL: [Self; 10] = [
        Self::CrateVersion,
        Self::OsName,
        Self::OsArch,
        Self::OsFamily,
        Self::FileSeparator,
        Self::PathSeparator,
        Self::LineSeparator,
        Self::UserName,
        Self::UserHome,
        Self::UserDir,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CrateVersion => "crate.version",
            Self::OsName => "os.name",
            Self::OsArch => "os.arch",
            Self::OsFamily => "os.family",
            Self::FileSeparator => "file.separator",
            Self::PathSeparator => "path.separator",
            Self::LineSeparator => "line.separator",
            Self::UserName => "user.name",
            Self::UserHome => "user.home",
            Self::UserDir => "user.dir",
        }
    }

    /// Resolves the current value of this property.
    #[must_use]
    pub fn get(self) -> Option<String> {
        match self {
            Self::CrateVersion => Some(crate_version()),
            Self::OsName => Some(os_name().to_owned()),
            Self::OsArch => Some(os_arch().to_owned()),
            Self::OsFamily => Some(os_family().to_owned()),
            Self::FileSeparator => Some(file_separator().to_owned()),
            Self::PathSeparator => Some(path_separator().to_owned()),
            Self::LineSeparator => Some(line_separator().to_owned()),
            Self::UserName => user_name(),
            Self::UserHome => user_home(),
            Self::UserDir => user_dir(),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Property {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|prop| prop.key() == key)
            .ok_or(Error::InvalidArgument {
                name: "property",
                reason: "unknown system property key",
            })
    }
}

/// The first of the given environment variables that is set to valid,
/// non-empty unicode.
fn first_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
}

#[must_use]
pub fn crate_version() -> String {
    env!("CARGO_PKG_VERSION").to_owned()
}

#[must_use]
pub fn os_name() -> &'static str {
    env::consts::OS
}

#[must_use]
pub fn os_arch() -> &'static str {
    env::consts::ARCH
}

#[must_use]
pub fn os_family() -> &'static str {
    env::consts::FAMILY
}

#[must_use]
pub fn file_separator() -> &'static str {
    std::path::MAIN_SEPARATOR_STR
}

#[must_use]
pub fn path_separator() -> &'static str {
    if cfg!(windows) { ";" } else { ":" }
}

#[must_use]
pub fn line_separator() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}

#[must_use]
pub fn user_name() -> Option<String> {
    first_var(&["USER", "USERNAME", "LOGNAME"])
}

#[must_use]
pub fn user_home() -> Option<String> {
    first_var(&["HOME", "USERPROFILE"])
}

#[must_use]
pub fn user_dir() -> Option<String> {
    env::current_dir()
        .ok()
        .and_then(|dir| dir.into_os_string().into_string().ok())
}
